// crates/choromap-core/src/model/format.rs

//! The plot-format table.
//!
//! One row per plottable numeric field: the value range the color mapper
//! should span, a numeral-style display format for the legend ticks, and a
//! human label. This parametrizes the renderer, it is not a domain entity.

use crate::error::{ChoroError, Result};
use crate::model::{CountryRecord, NeighborhoodRecord};

/// Display range and labelling for one plottable field.
#[derive(Clone, Debug)]
pub struct FormatDescriptor {
    pub field: &'static str,
    pub min_range: f64,
    pub max_range: f64,
    /// Numeral-style pattern, e.g. "0,0" or "$0,0".
    pub format: &'static str,
    pub verbage: &'static str,
}

/// All format descriptors known to the renderer.
#[derive(Clone, Debug, Default)]
pub struct FormatTable {
    rows: Vec<FormatDescriptor>,
}

impl FormatTable {
    /// Looks up the descriptor for `field`.
    pub fn lookup(&self, field: &str) -> Result<&FormatDescriptor> {
        self.rows
            .iter()
            .find(|d| d.field == field)
            .ok_or_else(|| ChoroError::UnknownField(field.to_string()))
    }

    pub fn rows(&self) -> &[FormatDescriptor] {
        &self.rows
    }

    /// Format table for the world map: a single `population` row spanning
    /// the merged data.
    pub fn world(records: &[CountryRecord]) -> Self {
        let (min, max) = min_max(records.iter().map(|r| r.population as f64));
        FormatTable {
            rows: vec![FormatDescriptor {
                field: "population",
                min_range: min,
                max_range: max,
                format: "0,0",
                verbage: "Population",
            }],
        }
    }

    /// Format table for the neighborhood map: one row per summary numeric,
    /// ranges taken from the merged data of the rendered year.
    pub fn neighborhoods(records: &[NeighborhoodRecord]) -> Self {
        let row = |field: &'static str,
                   format: &'static str,
                   verbage: &'static str,
                   get: fn(&NeighborhoodRecord) -> f64| {
            let (min, max) = min_max(records.iter().map(get));
            FormatDescriptor {
                field,
                min_range: min,
                max_range: max,
                format,
                verbage,
            }
        };
        FormatTable {
            rows: vec![
                row("sale_price_count", "0,0", "Number of Sales", |r| {
                    r.sale_price_count
                }),
                row("sale_price_mean", "$0,0", "Average Sales Price", |r| {
                    r.sale_price_mean
                }),
                row("sale_price_median", "$0,0", "Median Sales Price", |r| {
                    r.sale_price_median
                }),
                row("sf_mean", "0,0", "Average Square Footage", |r| r.sf_mean),
                row(
                    "price_sf_mean",
                    "$0,0",
                    "Average Price Per Square Foot",
                    |r| r.price_sf_mean,
                ),
                row("min_income", "$0,0", "Minimum Income Required", |r| {
                    r.min_income
                }),
            ],
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        // Empty input: degenerate range, the mapper clamps everything anyway.
        (0.0, 0.0)
    } else {
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_unknown_field_errors() {
        let table = FormatTable::world(&[]);
        assert!(table.lookup("population").is_ok());
        let err = table.lookup("gdp").unwrap_err();
        assert!(matches!(err, ChoroError::UnknownField(f) if f == "gdp"));
    }

    #[test]
    fn empty_records_give_degenerate_range() {
        let table = FormatTable::world(&[]);
        let d = table.lookup("population").unwrap();
        assert_eq!(d.min_range, 0.0);
        assert_eq!(d.max_range, 0.0);
    }
}
