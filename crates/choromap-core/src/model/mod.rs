// crates/choromap-core/src/model/mod.rs
pub mod format;
pub mod neighborhood;
pub mod world;

pub use format::{FormatDescriptor, FormatTable};
pub use neighborhood::{NeighborhoodAtlas, NeighborhoodRecord, NeighborhoodShape, SummaryRow};
pub use world::{CountryRecord, CountryShape, PopulationRow, WorldAtlas};

/// Coordinate reference system both boundary sets are pinned to before any
/// merge. WGS84 lat-long, so the two overlays line up.
pub const CRS_WGS84: &str = "EPSG:4326";
