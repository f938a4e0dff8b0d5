//! choromap — Command-line interface for choromap-core
//!
//! This binary runs the choropleth pipeline from your terminal: load the
//! boundary and table sources, merge them on their shared keys, and either
//! render a browser-viewable HTML map or emit the merged GeoJSON.
//!
//! Usage examples
//! --------------
//!
//! - Render the world population map
//!   $ choromap world
//!
//! - Render the SF neighborhood map for a year and criteria
//!   $ choromap neighborhoods --year 2015 --field min_income
//!
//! - Dump the merged GeoJSON instead of rendering
//!   $ choromap export neighborhoods --year 2015 --out merged.geojson
//!
//! - Show table counts
//!   $ choromap stats
//!
//! Data sources
//! ------------
//!
//! By default the world inputs are local files (`world_map.geo.json`,
//! `world_population.csv`) and the SF inputs are fetched from the
//! SF_Real_Estate_Live repository. Every source flag accepts a path or an
//! http(s) URL; remote sources need the `fetch` feature (on by default).
//! Set `CHOROMAP_LOG` (e.g. `CHOROMAP_LOG=debug`) for pipeline logging.
mod args;

use crate::args::{CliArgs, Commands, Dataset};
use anyhow::Context;
use clap::Parser;
use choromap_core::render::{Select, Slider, Widget};
use choromap_core::{
    loader, make_plot, merge_neighborhoods, merge_world, neighborhood_geojson, world_geojson,
    FormatTable, GeoJsonSource, HoverTool, Source,
};

const DEFAULT_PAGE: &str = "choropleth.html";

fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("CHOROMAP_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = CliArgs::parse();

    match &args.command {
        Commands::World => {
            let page = world_page(&args)?;
            let out = args.out.as_deref().unwrap_or(DEFAULT_PAGE);
            std::fs::write(out, page).with_context(|| format!("writing {out}"))?;
            println!("Wrote {out}");
        }

        Commands::Neighborhoods { year, field } => {
            let page = neighborhood_page(&args, *year, field)?;
            let out = args.out.as_deref().unwrap_or(DEFAULT_PAGE);
            std::fs::write(out, page).with_context(|| format!("writing {out}"))?;
            println!("Wrote {out}");
        }

        Commands::Export { dataset, year } => {
            let geojson = match dataset {
                Dataset::World => {
                    let (atlas, population) = load_world(&args)?;
                    world_geojson(&merge_world(&atlas, &population))
                }
                Dataset::Neighborhoods => {
                    let (atlas, summary) = load_neighborhoods(&args)?;
                    neighborhood_geojson(&merge_neighborhoods(&atlas, &summary, *year))
                }
            };
            match args.out.as_deref() {
                Some(out) => {
                    std::fs::write(out, geojson).with_context(|| format!("writing {out}"))?;
                    println!("Wrote {out}");
                }
                None => println!("{geojson}"),
            }
        }

        Commands::Stats { year } => {
            let (world_atlas, population) = load_world(&args)?;
            let world_merged = merge_world(&world_atlas, &population);
            let (sf_atlas, summary) = load_neighborhoods(&args)?;
            let sf_merged = merge_neighborhoods(&sf_atlas, &summary, *year);

            println!("Table statistics:");
            println!("  World boundaries: {}", world_atlas.shapes.len());
            println!("  Population rows: {}", population.len());
            println!("  World merged (inner join): {}", world_merged.len());
            println!("  Neighborhood boundaries: {}", sf_atlas.shapes.len());
            println!("  Summary rows: {}", summary.len());
            println!(
                "  Neighborhood merged for {year} (left join): {}",
                sf_merged.len()
            );
        }
    }

    Ok(())
}

fn load_world(
    args: &CliArgs,
) -> anyhow::Result<(choromap_core::WorldAtlas, Vec<choromap_core::PopulationRow>)> {
    let atlas = loader::load_world_boundaries(&Source::parse(&args.world_boundaries))?;
    let population = loader::load_population_table(&Source::parse(&args.world_population))?;
    Ok((atlas, population))
}

fn load_neighborhoods(
    args: &CliArgs,
) -> anyhow::Result<(choromap_core::NeighborhoodAtlas, Vec<choromap_core::SummaryRow>)> {
    let atlas = loader::load_neighborhood_boundaries(&Source::parse(&args.sf_boundaries))?;
    let summary = loader::load_neighborhood_table(&Source::parse(&args.neighborhood_data))?;
    Ok((atlas, summary))
}

fn world_page(args: &CliArgs) -> anyhow::Result<String> {
    let (atlas, population) = load_world(args)?;
    let merged = merge_world(&atlas, &population);

    let formats = FormatTable::world(&merged);
    let source = GeoJsonSource::from_string(&world_geojson(&merged))?;
    let figure = make_plot(
        "World Population 2018 by Country",
        "population",
        &formats,
        HoverTool::new("Country", "country"),
    )?;

    Ok(figure.to_html(&source, &inert_widgets()))
}

fn neighborhood_page(args: &CliArgs, year: u16, field: &str) -> anyhow::Result<String> {
    let (atlas, summary) = load_neighborhoods(args)?;
    let merged = merge_neighborhoods(&atlas, &summary, year);

    let formats = FormatTable::neighborhoods(&merged);
    let verbage = formats.lookup(field)?.verbage;
    let source = GeoJsonSource::from_string(&neighborhood_geojson(&merged))?;
    let figure = make_plot(
        &format!("San Francisco {verbage} {year} by Neighborhood"),
        field,
        &formats,
        HoverTool::new("Neighborhood", "neighborhood_name"),
    )?;

    Ok(figure.to_html(&source, &inert_widgets()))
}

// The year slider and criteria selector are instantiated but not wired to
// anything; re-rendering for a different year/criteria means re-running the
// command.
fn inert_widgets() -> Vec<Widget> {
    vec![
        Widget::Slider(Slider::year()),
        Widget::Select(Select::criteria()),
    ]
}
