// crates/choromap-core/src/loader/boundary.rs

//! GeoJSON boundary parsing.
//!
//! Two sources, two shapes: the world map (feature id + `name` property) and
//! the SF realtor neighborhoods (`nbrhood` / `nid` properties). Both are
//! pinned to EPSG:4326 on the returned atlas so the later overlays line up.

use crate::error::Result;
use crate::model::{NeighborhoodAtlas, NeighborhoodShape, WorldAtlas, CountryShape, CRS_WGS84};
use geojson::{feature::Id, Feature, FeatureCollection};
use std::io::Read;
use tracing::{info, warn};

/// Subdistrict codes the boundary file gets wrong relative to the summary
/// source's coding scheme. Fixed lookup patch, applied right after parsing;
/// keyed by neighborhood name.
const SUBDIST_PATCH: [(&str, &str); 4] = [
    ("Mount Davidson Manor", "4n"),
    ("Golden Gate Park", "12a"),
    ("Presidio", "12b"),
    ("Lincoln Park", "12c"),
];

/// Parses the world boundary GeoJSON, keeping id, name and geometry.
pub fn world_from_reader(mut reader: Box<dyn Read>) -> Result<WorldAtlas> {
    let collection = parse_collection(&mut reader)?;

    let mut shapes = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        let Some(country) = str_property(&feature, "name") else {
            warn!("skipping world feature without a name property");
            continue;
        };
        let Some(geometry) = feature.geometry else {
            warn!(country = %country, "skipping world feature without geometry");
            continue;
        };
        let id = match &feature.id {
            Some(Id::String(s)) => s.clone(),
            Some(Id::Number(n)) => n.to_string(),
            None => String::new(),
        };
        shapes.push(CountryShape {
            id,
            country,
            geometry,
        });
    }

    info!(count = shapes.len(), "loaded world boundaries");
    Ok(WorldAtlas {
        crs: CRS_WGS84.to_string(),
        shapes,
    })
}

/// Parses the SF neighborhood boundary GeoJSON, renaming `nbrhood` to
/// `neighborhood_name` and `nid` to `subdist_no`, then applies
/// [`SUBDIST_PATCH`].
pub fn neighborhoods_from_reader(mut reader: Box<dyn Read>) -> Result<NeighborhoodAtlas> {
    let collection = parse_collection(&mut reader)?;

    let mut shapes = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        let Some(neighborhood_name) = str_property(&feature, "nbrhood") else {
            warn!("skipping neighborhood feature without an nbrhood property");
            continue;
        };
        let Some(subdist_no) = str_property(&feature, "nid") else {
            warn!(neighborhood = %neighborhood_name, "skipping neighborhood feature without an nid property");
            continue;
        };
        let Some(geometry) = feature.geometry else {
            warn!(neighborhood = %neighborhood_name, "skipping neighborhood feature without geometry");
            continue;
        };
        shapes.push(NeighborhoodShape {
            subdist_no,
            neighborhood_name,
            geometry,
        });
    }

    for shape in &mut shapes {
        if let Some((_, code)) = SUBDIST_PATCH
            .iter()
            .find(|(name, _)| *name == shape.neighborhood_name)
        {
            shape.subdist_no = (*code).to_string();
        }
    }

    info!(count = shapes.len(), "loaded neighborhood boundaries");
    Ok(NeighborhoodAtlas {
        crs: CRS_WGS84.to_string(),
        shapes,
    })
}

fn parse_collection(reader: &mut Box<dyn Read>) -> Result<FeatureCollection> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text.parse::<FeatureCollection>()?)
}

fn str_property(feature: &Feature, key: &str) -> Option<String> {
    feature
        .property(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(s: &str) -> Box<dyn Read> {
        Box::new(std::io::Cursor::new(s.to_string()))
    }

    const WORLD: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "id": "AFG",
             "properties": {"name": "Afghanistan"},
             "geometry": {"type": "Polygon", "coordinates": [[[61.0, 35.0], [62.0, 35.0], [62.0, 36.0], [61.0, 35.0]]]}},
            {"type": "Feature", "id": "XXX",
             "properties": {"name": "Nowhere"},
             "geometry": null}
        ]
    }"#;

    const SF: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature",
             "properties": {"nbrhood": "Golden Gate Park", "nid": "GGP"},
             "geometry": {"type": "Polygon", "coordinates": [[[-122.51, 37.76], [-122.45, 37.76], [-122.45, 37.77], [-122.51, 37.76]]]}},
            {"type": "Feature",
             "properties": {"nbrhood": "Sea Cliff", "nid": "1a"},
             "geometry": {"type": "Polygon", "coordinates": [[[-122.49, 37.78], [-122.48, 37.78], [-122.48, 37.79], [-122.49, 37.78]]]}}
        ]
    }"#;

    #[test]
    fn world_keeps_id_name_geometry_and_drops_null_geometry() {
        let atlas = world_from_reader(reader(WORLD)).unwrap();
        assert_eq!(atlas.crs, CRS_WGS84);
        assert_eq!(atlas.shapes.len(), 1);
        assert_eq!(atlas.shapes[0].id, "AFG");
        assert_eq!(atlas.shapes[0].country, "Afghanistan");
    }

    #[test]
    fn neighborhood_codes_are_patched() {
        let atlas = neighborhoods_from_reader(reader(SF)).unwrap();
        assert_eq!(atlas.shapes.len(), 2);
        // Boundary file said "GGP"; summary scheme says "12a".
        assert_eq!(atlas.shapes[0].neighborhood_name, "Golden Gate Park");
        assert_eq!(atlas.shapes[0].subdist_no, "12a");
        // Untouched codes pass through.
        assert_eq!(atlas.shapes[1].subdist_no, "1a");
    }
}
