// crates/choromap-core/src/merge.rs

//! The two joins at the heart of the pipeline.
//!
//! Both are plain key joins over in-memory tables. The world merge is an
//! inner join on the exact country name; the neighborhood merge is a left
//! join on the subdistrict code with zero-fill for missing summary rows.

use crate::model::{
    CountryRecord, NeighborhoodAtlas, NeighborhoodRecord, PopulationRow, SummaryRow, WorldAtlas,
};
use std::collections::HashMap;
use tracing::info;

/// Inner-joins world boundaries with the population table on the exact
/// country name.
///
/// No normalization of name variants (diacritics, aliases): a name that does
/// not match in both sources is silently excluded. Output keeps boundary
/// order; a duplicated name in the population table contributes its first row.
pub fn merge_world(atlas: &WorldAtlas, population: &[PopulationRow]) -> Vec<CountryRecord> {
    let mut by_country: HashMap<&str, u64> = HashMap::with_capacity(population.len());
    for row in population {
        by_country.entry(row.country.as_str()).or_insert(row.population);
    }

    let merged: Vec<CountryRecord> = atlas
        .shapes
        .iter()
        .filter_map(|shape| {
            by_country.get(shape.country.as_str()).map(|&population| CountryRecord {
                id: shape.id.clone(),
                country: shape.country.clone(),
                geometry: shape.geometry.clone(),
                population,
            })
        })
        .collect();

    info!(
        boundaries = atlas.shapes.len(),
        matched = merged.len(),
        "merged world population"
    );
    merged
}

/// Left-joins neighborhood boundaries with the summary rows of one year.
///
/// Every boundary polygon is preserved. Where no summary row exists for the
/// (code, year) pair, the numeric fields are filled with zero and `year` is
/// set to the requested year. Zero-fill conflates "no data" with "value is
/// zero"; that is the source data's policy and is kept as-is.
pub fn merge_neighborhoods(
    atlas: &NeighborhoodAtlas,
    summary: &[SummaryRow],
    year: u16,
) -> Vec<NeighborhoodRecord> {
    let by_code: HashMap<&str, &SummaryRow> = summary
        .iter()
        .filter(|row| row.year == year)
        .map(|row| (row.subdist_no.as_str(), row))
        .collect();

    let merged: Vec<NeighborhoodRecord> = atlas
        .shapes
        .iter()
        .map(|shape| match by_code.get(shape.subdist_no.as_str()) {
            Some(row) => NeighborhoodRecord {
                subdist_no: shape.subdist_no.clone(),
                neighborhood_name: shape.neighborhood_name.clone(),
                geometry: shape.geometry.clone(),
                year: row.year,
                sale_price_count: row.sale_price_count,
                sale_price_mean: row.sale_price_mean,
                sale_price_median: row.sale_price_median,
                sf_mean: row.sf_mean,
                price_sf_mean: row.price_sf_mean,
                min_income: row.min_income,
            },
            None => NeighborhoodRecord {
                subdist_no: shape.subdist_no.clone(),
                neighborhood_name: shape.neighborhood_name.clone(),
                geometry: shape.geometry.clone(),
                year,
                sale_price_count: 0.0,
                sale_price_mean: 0.0,
                sale_price_median: 0.0,
                sf_mean: 0.0,
                price_sf_mean: 0.0,
                min_income: 0.0,
            },
        })
        .collect();

    info!(year, count = merged.len(), "merged neighborhood summary");
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CountryShape, NeighborhoodShape, CRS_WGS84};
    use geojson::{Geometry, Value};

    fn square(offset: f64) -> Geometry {
        Geometry::new(Value::Polygon(vec![vec![
            vec![offset, 0.0],
            vec![offset + 1.0, 0.0],
            vec![offset + 1.0, 1.0],
            vec![offset, 1.0],
            vec![offset, 0.0],
        ]]))
    }

    fn world_atlas() -> WorldAtlas {
        WorldAtlas {
            crs: CRS_WGS84.to_string(),
            shapes: vec![
                CountryShape {
                    id: "DEU".into(),
                    country: "Germany".into(),
                    geometry: square(0.0),
                },
                CountryShape {
                    id: "FRA".into(),
                    country: "France".into(),
                    geometry: square(2.0),
                },
            ],
        }
    }

    fn sf_atlas() -> NeighborhoodAtlas {
        NeighborhoodAtlas {
            crs: CRS_WGS84.to_string(),
            shapes: vec![
                NeighborhoodShape {
                    subdist_no: "4n".into(),
                    neighborhood_name: "Mount Davidson Manor".into(),
                    geometry: square(0.0),
                },
                NeighborhoodShape {
                    subdist_no: "1a".into(),
                    neighborhood_name: "Sea Cliff".into(),
                    geometry: square(2.0),
                },
            ],
        }
    }

    fn summary(subdist_no: &str, year: u16, median: f64) -> SummaryRow {
        SummaryRow {
            subdist_no: subdist_no.into(),
            year,
            sale_price_count: 10.0,
            sale_price_mean: median + 50_000.0,
            sale_price_median: median,
            sf_mean: 1800.0,
            price_sf_mean: 800.0,
            min_income: 250_000.0,
        }
    }

    #[test]
    fn world_merge_is_inner_join_on_exact_name() {
        let population = vec![
            PopulationRow {
                country: "Germany".into(),
                population: 82_905_782,
            },
            // Name variant: must NOT match "France".
            PopulationRow {
                country: "France, Metropolitan".into(),
                population: 66_977_107,
            },
        ];
        let merged = merge_world(&world_atlas(), &population);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].country, "Germany");
        assert_eq!(merged[0].population, 82_905_782);
        assert_eq!(merged[0].id, "DEU");
    }

    #[test]
    fn world_merge_takes_first_row_for_duplicate_names() {
        let population = vec![
            PopulationRow {
                country: "Germany".into(),
                population: 1,
            },
            PopulationRow {
                country: "Germany".into(),
                population: 2,
            },
        ];
        let merged = merge_world(&world_atlas(), &population);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].population, 1);
    }

    #[test]
    fn neighborhood_merge_preserves_every_boundary() {
        let rows = vec![summary("1a", 2018, 4_100_000.0)];
        let merged = merge_neighborhoods(&sf_atlas(), &rows, 2018);
        assert_eq!(merged.len(), 2);
        let codes: Vec<&str> = merged.iter().map(|r| r.subdist_no.as_str()).collect();
        assert_eq!(codes, ["4n", "1a"]);
    }

    #[test]
    fn missing_year_zero_fills_and_keeps_geometry() {
        // No summary row for "4n" in 2015.
        let rows = vec![summary("4n", 2016, 1_450_000.0)];
        let merged = merge_neighborhoods(&sf_atlas(), &rows, 2015);

        let r = merged.iter().find(|r| r.subdist_no == "4n").unwrap();
        assert_eq!(r.year, 2015);
        assert_eq!(r.sale_price_count, 0.0);
        assert_eq!(r.sale_price_mean, 0.0);
        assert_eq!(r.min_income, 0.0);
        assert_eq!(r.geometry, sf_atlas().shapes[0].geometry);
    }

    #[test]
    fn matching_year_carries_summary_fields() {
        let rows = vec![summary("4n", 2016, 1_450_000.0)];
        let merged = merge_neighborhoods(&sf_atlas(), &rows, 2016);
        let r = merged.iter().find(|r| r.subdist_no == "4n").unwrap();
        assert_eq!(r.sale_price_median, 1_450_000.0);
        assert_eq!(r.year, 2016);
    }
}
