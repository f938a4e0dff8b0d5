// crates/choromap-core/src/model/neighborhood.rs
use geojson::Geometry;
use serde::{Deserialize, Serialize};

/// A San Francisco realtor-neighborhood boundary polygon.
///
/// `subdist_no` is the join key against [`SummaryRow`]. The boundary source
/// and the summary source disagree on four codes; the loader patches those
/// right after parsing (see `loader::boundary::SUBDIST_PATCH`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NeighborhoodShape {
    pub subdist_no: String,
    pub neighborhood_name: String,
    pub geometry: Geometry,
}

/// All neighborhood boundaries, pinned to a CRS at load time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NeighborhoodAtlas {
    pub crs: String,
    pub shapes: Vec<NeighborhoodShape>,
}

/// One row of the neighborhood summary CSV: sales statistics for a
/// (subdistrict, year) pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SummaryRow {
    pub subdist_no: String,
    pub year: u16,
    pub sale_price_count: f64,
    pub sale_price_mean: f64,
    pub sale_price_median: f64,
    pub sf_mean: f64,
    pub price_sf_mean: f64,
    pub min_income: f64,
}

/// A neighborhood boundary joined with the summary data of one year.
///
/// Every boundary polygon yields exactly one record per requested year; when
/// no summary row exists for the (code, year) pair, all numeric fields are
/// zero and `year` is the requested year. Zero therefore means both
/// "no sales" and "no data" — deliberate, inherited from the data source.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NeighborhoodRecord {
    pub subdist_no: String,
    pub neighborhood_name: String,
    pub geometry: Geometry,
    pub year: u16,
    pub sale_price_count: f64,
    pub sale_price_mean: f64,
    pub sale_price_median: f64,
    pub sf_mean: f64,
    pub price_sf_mean: f64,
    pub min_income: f64,
}
