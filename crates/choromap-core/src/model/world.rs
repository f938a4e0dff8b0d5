// crates/choromap-core/src/model/world.rs
use geojson::Geometry;
use serde::{Deserialize, Serialize};

/// A country boundary polygon, before the population join.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CountryShape {
    pub id: String,
    pub country: String,
    pub geometry: Geometry,
}

/// One row of the world population table (the 2018 column only).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PopulationRow {
    pub country: String,
    pub population: u64,
}

/// A country boundary with its joined population.
///
/// Produced by the world merge; only countries whose name matched exactly in
/// both sources appear here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CountryRecord {
    pub id: String,
    pub country: String,
    pub geometry: Geometry,
    pub population: u64,
}

/// All world boundaries, pinned to a CRS at load time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldAtlas {
    pub crs: String,
    /// Master list of all country shapes, in source order.
    pub shapes: Vec<CountryShape>,
}
