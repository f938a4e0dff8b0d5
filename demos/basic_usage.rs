//! Basic usage example for choromap-rs
//!
//! Builds a two-country world map from in-memory data and writes the
//! rendered page next to the current directory.

use choromap_core::model::{CountryShape, WorldAtlas, CRS_WGS84};
use choromap_core::{
    make_plot, merge_world, world_geojson, FormatTable, GeoJsonSource, HoverTool, PopulationRow,
    Result,
};
use geojson::{Geometry, Value};

fn main() -> Result<()> {
    let atlas = WorldAtlas {
        crs: CRS_WGS84.to_string(),
        shapes: vec![
            shape("DEU", "Germany", 6.0, 47.0, 15.0, 55.0),
            shape("FRA", "France", -5.0, 42.0, 8.0, 51.0),
        ],
    };
    let population = vec![
        PopulationRow {
            country: "Germany".to_string(),
            population: 82_905_782,
        },
        PopulationRow {
            country: "France".to_string(),
            population: 66_977_107,
        },
    ];

    let merged = merge_world(&atlas, &population);
    println!("Merged {} countries", merged.len());
    for record in &merged {
        println!("- {}: {}", record.country, record.population);
    }

    let formats = FormatTable::world(&merged);
    let source = GeoJsonSource::from_string(&world_geojson(&merged))?;
    let figure = make_plot(
        "Demo Population Map",
        "population",
        &formats,
        HoverTool::new("Country", "country"),
    )?;

    let page = figure.to_html(&source, &[]);
    std::fs::write("demo_map.html", page)?;
    println!("Wrote demo_map.html");
    Ok(())
}

fn shape(id: &str, country: &str, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> CountryShape {
    CountryShape {
        id: id.to_string(),
        country: country.to_string(),
        geometry: Geometry::new(Value::Polygon(vec![vec![
            vec![min_x, min_y],
            vec![max_x, min_y],
            vec![max_x, max_y],
            vec![min_x, max_y],
            vec![min_x, min_y],
        ]])),
    }
}
