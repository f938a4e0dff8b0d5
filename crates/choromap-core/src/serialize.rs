// crates/choromap-core/src/serialize.rs

//! Merged tables → GeoJSON text.
//!
//! The plotting surface consumes plain GeoJSON, so each merged record
//! becomes one Feature carrying its attributes as properties. Properties are
//! written in a fixed order; serializing the same table twice yields
//! byte-identical output.

use crate::model::{CountryRecord, NeighborhoodRecord};
use geojson::{feature::Id, Feature, FeatureCollection, GeoJson};

/// Serializes the merged world table to a GeoJSON FeatureCollection string.
pub fn world_geojson(records: &[CountryRecord]) -> String {
    let features: FeatureCollection = records
        .iter()
        .map(|r| {
            let mut feature = Feature {
                bbox: None,
                geometry: Some(r.geometry.clone()),
                id: Some(Id::String(r.id.clone())),
                properties: None,
                foreign_members: None,
            };
            feature.set_property("country", r.country.clone());
            feature.set_property("population", r.population);
            feature
        })
        .collect();
    GeoJson::from(features).to_string()
}

/// Serializes the merged neighborhood table of one year to a GeoJSON
/// FeatureCollection string.
pub fn neighborhood_geojson(records: &[NeighborhoodRecord]) -> String {
    let features: FeatureCollection = records
        .iter()
        .map(|r| {
            let mut feature = Feature {
                bbox: None,
                geometry: Some(r.geometry.clone()),
                id: None,
                properties: None,
                foreign_members: None,
            };
            feature.set_property("subdist_no", r.subdist_no.clone());
            feature.set_property("neighborhood_name", r.neighborhood_name.clone());
            feature.set_property("year", r.year);
            feature.set_property("sale_price_count", r.sale_price_count);
            feature.set_property("sale_price_mean", r.sale_price_mean);
            feature.set_property("sale_price_median", r.sale_price_median);
            feature.set_property("sf_mean", r.sf_mean);
            feature.set_property("price_sf_mean", r.price_sf_mean);
            feature.set_property("min_income", r.min_income);
            feature
        })
        .collect();
    GeoJson::from(features).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::{Geometry, Value};

    fn record() -> CountryRecord {
        CountryRecord {
            id: "DEU".into(),
            country: "Germany".into(),
            geometry: Geometry::new(Value::Polygon(vec![vec![
                vec![0.0, 0.0],
                vec![1.0, 0.0],
                vec![1.0, 1.0],
                vec![0.0, 0.0],
            ]])),
            population: 82_905_782,
        }
    }

    #[test]
    fn world_serialization_is_idempotent() {
        let records = vec![record()];
        assert_eq!(world_geojson(&records), world_geojson(&records));
    }

    #[test]
    fn world_features_carry_id_and_properties() {
        let text = world_geojson(&[record()]);
        let parsed: geojson::FeatureCollection = text.parse().unwrap();
        assert_eq!(parsed.features.len(), 1);
        let f = &parsed.features[0];
        assert_eq!(f.property("country").and_then(|v| v.as_str()), Some("Germany"));
        assert_eq!(f.property("population").and_then(|v| v.as_u64()), Some(82_905_782));
        assert!(f.geometry.is_some());
    }

    #[test]
    fn empty_table_serializes_to_empty_collection() {
        let text = neighborhood_geojson(&[]);
        let parsed: geojson::FeatureCollection = text.parse().unwrap();
        assert!(parsed.features.is_empty());
    }
}
