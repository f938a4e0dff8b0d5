// crates/choromap-core/src/lib.rs

pub mod error;
pub mod loader; // The public loader
pub mod merge;
pub mod model;
pub mod palette;
pub mod render;
pub mod serialize;

// Re-exports
pub use crate::error::{ChoroError, Result};
pub use crate::loader::Source;
// Export the Model Types
pub use crate::model::{
    CountryRecord, CountryShape, FormatDescriptor, FormatTable, NeighborhoodAtlas,
    NeighborhoodRecord, NeighborhoodShape, PopulationRow, SummaryRow, WorldAtlas,
};
pub use crate::merge::{merge_neighborhoods, merge_world};
pub use crate::palette::LinearColorMapper;
pub use crate::render::{make_plot, Figure, GeoJsonSource, HoverTool};
pub use crate::serialize::{neighborhood_geojson, world_geojson};
