// crates/choromap-core/src/render/mod.rs

//! # Renderer
//!
//! Turns serialized GeoJSON into a browser-viewable choropleth: an SVG
//! polygon plot with a color-bar legend and hover tooltips, wrapped in a
//! standalone HTML page together with the (inert) year/criteria widgets.

use crate::error::Result;
use crate::model::FormatTable;
use crate::palette::{blues_8_reversed, LinearColorMapper};
use geojson::{Feature, FeatureCollection};

pub mod svg;
pub mod widgets;

pub use widgets::{Select, Slider, Widget};

/// Plot dimensions, matching the original figure.
pub const PLOT_WIDTH: u32 = 1200;
pub const PLOT_HEIGHT: u32 = 650;

/// A plot data source backed by serialized GeoJSON.
///
/// The renderer deliberately consumes the serializer's output rather than
/// the merged tables, so anything expressible as a FeatureCollection with
/// numeric properties can be plotted.
pub struct GeoJsonSource {
    collection: FeatureCollection,
}

impl GeoJsonSource {
    pub fn from_string(geojson: &str) -> Result<Self> {
        Ok(GeoJsonSource {
            collection: geojson.parse()?,
        })
    }

    pub fn features(&self) -> &[Feature] {
        &self.collection.features
    }
}

/// Hover tooltip configuration: a label and the property it displays,
/// e.g. ("Country", "country").
#[derive(Clone, Debug)]
pub struct HoverTool {
    pub label: String,
    pub field: String,
}

impl HoverTool {
    pub fn new(label: &str, field: &str) -> Self {
        HoverTool {
            label: label.to_string(),
            field: field.to_string(),
        }
    }
}

/// Color-bar legend configuration.
#[derive(Clone, Debug)]
pub struct ColorBar {
    /// Numeral-style pattern for the tick labels.
    pub format: String,
    /// Gap between the bar and its tick labels, in px.
    pub label_standoff: u32,
}

/// A fully configured choropleth figure, ready to render over a source.
pub struct Figure {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// The property each polygon is colored by.
    pub field: String,
    pub mapper: LinearColorMapper,
    pub color_bar: ColorBar,
    pub hover: HoverTool,
}

/// Builds the figure for `field_name`: looks up its display range and format
/// in the format table, spans a linear color mapping over that range (Blues,
/// reversed, so dark is high), and attaches the color bar and hover tool.
pub fn make_plot(
    title: &str,
    field_name: &str,
    formats: &FormatTable,
    hover: HoverTool,
) -> Result<Figure> {
    let desc = formats.lookup(field_name)?;
    let mapper = LinearColorMapper::new(blues_8_reversed(), desc.min_range, desc.max_range);

    Ok(Figure {
        title: title.to_string(),
        width: PLOT_WIDTH,
        height: PLOT_HEIGHT,
        field: field_name.to_string(),
        mapper,
        color_bar: ColorBar {
            format: desc.format.to_string(),
            label_standoff: 18,
        },
        hover,
    })
}

impl Figure {
    /// Renders the figure over `source` as an inline SVG element.
    pub fn to_svg(&self, source: &GeoJsonSource) -> String {
        svg::render(self, source)
    }

    /// Renders a standalone HTML page: the plot followed by the widgets in
    /// a column layout. The widgets are emitted disabled; no change handler
    /// is wired in this version, so selecting a year or criteria has no
    /// effect on the plot.
    pub fn to_html(&self, source: &GeoJsonSource, widgets: &[Widget]) -> String {
        let mut page = String::new();
        page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        page.push_str(&format!("<title>{}</title>\n", svg::escape(&self.title)));
        page.push_str("<style>\n.container { width: 100%; }\n.widgets { margin-top: 12px; font-family: sans-serif; }\n.widgets label { display: block; margin-bottom: 6px; }\n</style>\n");
        page.push_str("</head>\n<body>\n<div class=\"container\">\n");
        page.push_str(&self.to_svg(source));
        page.push_str("\n<div class=\"widgets\">\n");
        for widget in widgets {
            page.push_str(&widget.to_html());
            page.push('\n');
        }
        page.push_str("</div>\n</div>\n</body>\n</html>\n");
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CountryRecord, FormatTable};
    use crate::serialize::world_geojson;
    use geojson::{Geometry, Value};

    fn source() -> GeoJsonSource {
        let records = vec![CountryRecord {
            id: "DEU".into(),
            country: "Germany".into(),
            geometry: Geometry::new(Value::Polygon(vec![vec![
                vec![6.0, 47.0],
                vec![15.0, 47.0],
                vec![15.0, 55.0],
                vec![6.0, 47.0],
            ]])),
            population: 82_905_782,
        }];
        GeoJsonSource::from_string(&world_geojson(&records)).unwrap()
    }

    fn figure() -> Figure {
        let formats = FormatTable::world(&[CountryRecord {
            id: "DEU".into(),
            country: "Germany".into(),
            geometry: Geometry::new(Value::Polygon(vec![])),
            population: 82_905_782,
        }]);
        make_plot(
            "World Population 2018 by Country",
            "population",
            &formats,
            HoverTool::new("Country", "country"),
        )
        .unwrap()
    }

    #[test]
    fn make_plot_rejects_unknown_field() {
        let formats = FormatTable::world(&[]);
        let err = make_plot("t", "gdp", &formats, HoverTool::new("Country", "country"));
        assert!(err.is_err());
    }

    #[test]
    fn svg_contains_polygon_and_tooltip() {
        let svg = figure().to_svg(&source());
        assert!(svg.contains("<path"));
        assert!(svg.contains("<title>Country: Germany</title>"));
        // Degenerate single-value range: everything maps to the first color.
        assert!(svg.contains("fill=\"#f7fbff\""));
    }

    #[test]
    fn html_page_carries_disabled_widgets() {
        let fig = figure();
        let widgets = [
            Widget::Slider(Slider::year()),
            Widget::Select(Select::criteria()),
        ];
        let html = fig.to_html(&source(), &widgets);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<svg"));
        assert_eq!(html.matches("disabled").count(), 2);
    }
}
