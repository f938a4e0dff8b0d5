// crates/choromap-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (local files, optional HTTP, decompression)
//! and delegates to specific parsers (GeoJSON boundaries vs CSV tables).

use crate::error::Result;
use crate::model::{NeighborhoodAtlas, PopulationRow, SummaryRow, WorldAtlas};
use std::io::Read;
use std::path::PathBuf;

pub mod boundary;
pub mod table;

mod common_io;

#[cfg(feature = "fetch")]
mod fetch;

/// Neighborhood summary CSV published by the SF_Real_Estate_Live project.
pub const NEIGHBORHOOD_DATA_URL: &str =
    "https://raw.githubusercontent.com/JimKing100/SF_Real_Estate_Live/master/data/neighborhood_data.csv";

/// Realtor neighborhood boundary GeoJSON from the same project.
pub const SF_BOUNDARIES_URL: &str =
    "https://raw.githubusercontent.com/JimKing100/SF_Real_Estate_Live/master/data/Realtor%20Neighborhoods.geojson";

/// Default local filename for the world boundary GeoJSON.
pub const WORLD_BOUNDARIES_FILE: &str = "world_map.geo.json";

/// Default local filename for the semicolon-delimited world population CSV.
pub const WORLD_POPULATION_FILE: &str = "world_population.csv";

/// Where an input lives. URLs require the `fetch` feature.
#[derive(Clone, Debug)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Source {
    /// Classifies a CLI-style location string: anything with an http(s)
    /// scheme is remote, everything else is a local path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Source::Url(location.to_string())
        } else {
            Source::Path(PathBuf::from(location))
        }
    }

    fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            Source::Path(path) => common_io::open_stream(path),
            #[cfg(feature = "fetch")]
            Source::Url(url) => fetch::open_url(url),
            #[cfg(not(feature = "fetch"))]
            Source::Url(url) => Err(crate::error::ChoroError::InvalidData(format!(
                "remote source {url} requires the 'fetch' feature"
            ))),
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Path(p) => write!(f, "{}", p.display()),
            Source::Url(u) => write!(f, "{u}"),
        }
    }
}

/// Loads the world boundary GeoJSON, keeping id, name and geometry.
pub fn load_world_boundaries(src: &Source) -> Result<WorldAtlas> {
    boundary::world_from_reader(src.open()?)
}

/// Loads the SF neighborhood boundary GeoJSON and applies the fixed
/// subdistrict-code patch.
pub fn load_neighborhood_boundaries(src: &Source) -> Result<NeighborhoodAtlas> {
    boundary::neighborhoods_from_reader(src.open()?)
}

/// Loads the semicolon-delimited world population CSV (2018 column).
pub fn load_population_table(src: &Source) -> Result<Vec<PopulationRow>> {
    table::population_from_reader(src.open()?)
}

/// Loads the neighborhood summary CSV.
pub fn load_neighborhood_table(src: &Source) -> Result<Vec<SummaryRow>> {
    table::summary_from_reader(src.open()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChoroError;

    #[test]
    fn source_parse_classifies_urls_and_paths() {
        assert!(matches!(
            Source::parse("https://example.com/data.csv"),
            Source::Url(_)
        ));
        assert!(matches!(
            Source::parse("data/world_map.geo.json"),
            Source::Path(_)
        ));
        // A scheme-less host is treated as a path.
        assert!(matches!(Source::parse("example.com/x.csv"), Source::Path(_)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let src = Source::parse("definitely/not/here.csv");
        let err = load_population_table(&src).unwrap_err();
        assert!(matches!(err, ChoroError::NotFound(_)));
    }
}
