use clap::{Parser, Subcommand, ValueEnum};
use choromap_core::loader;

/// CLI arguments for choromap
#[derive(Debug, Parser)]
#[command(
    name = "choromap",
    version,
    about = "Render choropleth maps from population and real-estate data"
)]
pub struct CliArgs {
    /// Path or URL of the world boundary GeoJSON
    #[arg(long = "world-boundaries", global = true, default_value = loader::WORLD_BOUNDARIES_FILE)]
    pub world_boundaries: String,

    /// Path or URL of the semicolon-delimited world population CSV
    #[arg(long = "world-population", global = true, default_value = loader::WORLD_POPULATION_FILE)]
    pub world_population: String,

    /// Path or URL of the SF realtor-neighborhood boundary GeoJSON
    #[arg(long = "sf-boundaries", global = true, default_value = loader::SF_BOUNDARIES_URL)]
    pub sf_boundaries: String,

    /// Path or URL of the neighborhood summary CSV
    #[arg(long = "neighborhood-data", global = true, default_value = loader::NEIGHBORHOOD_DATA_URL)]
    pub neighborhood_data: String,

    /// Output file (defaults to choropleth.html, or stdout for export)
    #[arg(short = 'o', long = "out", global = true)]
    pub out: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the world population map to an HTML page
    World,

    /// Render the SF neighborhood map for a year to an HTML page
    Neighborhoods {
        /// Year to plot (the slider range is 2009-2018)
        #[arg(long, default_value_t = 2018)]
        year: u16,

        /// Field to color by (e.g. sale_price_median, min_income)
        #[arg(long, default_value = "sale_price_median")]
        field: String,
    },

    /// Write merged GeoJSON without rendering
    Export {
        /// Which merged dataset to serialize
        dataset: Dataset,

        /// Year for the neighborhood dataset
        #[arg(long, default_value_t = 2018)]
        year: u16,
    },

    /// Show row counts for the loaded and merged tables
    Stats {
        /// Year for the neighborhood merge
        #[arg(long, default_value_t = 2018)]
        year: u16,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Dataset {
    World,
    Neighborhoods,
}
