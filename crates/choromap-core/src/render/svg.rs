// crates/choromap-core/src/render/svg.rs

//! SVG emission for the choropleth figure.
//!
//! Geometry is projected with a plain equirectangular mapping of WGS84
//! lon/lat into the plot viewport (both boundary sources are pinned to
//! EPSG:4326 before merging, so this is safe). Hover tooltips ride on SVG
//! `<title>` elements, which browsers display natively.

use super::{Figure, GeoJsonSource};
use crate::palette::format_numeral;
use geojson::{Feature, Value};
use std::fmt::Write as _;

/// Horizontal room reserved on the right for the color bar and its labels.
const COLOR_BAR_GUTTER: f64 = 120.0;
/// Padding around the drawable map area.
const MARGIN: f64 = 10.0;
/// Vertical room reserved for the title.
const TITLE_BAND: f64 = 36.0;
/// Fill used when a feature lacks the plotted property (cannot happen for
/// the pipeline's own output; kept for arbitrary GeoJSON sources).
const NO_DATA_FILL: &str = "#d9d9d9";

pub(super) fn render(figure: &Figure, source: &GeoJsonSource) -> String {
    let view = Viewport::fit(figure, source);

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = figure.width,
        h = figure.height
    );
    let _ = write!(
        svg,
        "\n<rect width=\"{w}\" height=\"{h}\" fill=\"white\"/>",
        w = figure.width,
        h = figure.height
    );
    let _ = write!(
        svg,
        "\n<text x=\"{x}\" y=\"24\" font-family=\"sans-serif\" font-size=\"18\" font-weight=\"bold\">{t}</text>",
        x = MARGIN,
        t = escape(&figure.title)
    );

    // No grid, no axes, no toolbar: just the patches.
    for feature in source.features() {
        svg.push('\n');
        svg.push_str(&patch(figure, feature, &view));
    }

    svg.push('\n');
    svg.push_str(&color_bar(figure));

    svg.push_str("\n</svg>");
    svg
}

/// Emits one polygon (or multipolygon) patch with its fill, outline and
/// tooltip.
fn patch(figure: &Figure, feature: &Feature, view: &Viewport) -> String {
    let mut d = String::new();
    if let Some(geometry) = &feature.geometry {
        match &geometry.value {
            Value::Polygon(rings) => polygon_path(&mut d, rings, view),
            Value::MultiPolygon(polys) => {
                for rings in polys {
                    polygon_path(&mut d, rings, view);
                }
            }
            // Non-areal geometry cannot be choropleth-shaded; skip it.
            _ => return String::new(),
        }
    } else {
        return String::new();
    }

    let value = feature.property(&figure.field).and_then(|v| v.as_f64());
    let fill = match value {
        Some(v) => figure.mapper.color(v),
        None => NO_DATA_FILL,
    };

    let mut out = String::new();
    let _ = write!(
        out,
        "<path d=\"{d}\" fill=\"{fill}\" stroke=\"black\" stroke-width=\"0.25\" fill-rule=\"evenodd\">"
    );
    if let Some(name) = feature.property(&figure.hover.field).and_then(|v| v.as_str()) {
        let _ = write!(
            out,
            "<title>{}: {}</title>",
            escape(&figure.hover.label),
            escape(name)
        );
    }
    out.push_str("</path>");
    out
}

fn polygon_path(d: &mut String, rings: &[Vec<Vec<f64>>], view: &Viewport) {
    for ring in rings {
        for (i, position) in ring.iter().enumerate() {
            let (x, y) = view.project(position[0], position[1]);
            let _ = write!(d, "{}{x:.2} {y:.2}", if i == 0 { "M" } else { "L" });
        }
        d.push('Z');
    }
}

/// The color-bar legend: one swatch per palette color, bottom = low, with
/// numeral-formatted tick labels at the bin boundaries.
fn color_bar(figure: &Figure) -> String {
    let palette = figure.mapper.palette();
    let n = palette.len();

    let bar_x = figure.width as f64 - COLOR_BAR_GUTTER + 20.0;
    let bar_top = TITLE_BAND + 20.0;
    let bar_height = figure.height as f64 - bar_top - 40.0;
    let bar_width = 20.0;
    let swatch_height = bar_height / n as f64;

    let mut out = String::from("<g font-family=\"sans-serif\" font-size=\"11\">");
    for (i, color) in palette.iter().enumerate() {
        // Stack from the bottom so the last palette entry sits on top.
        let y = bar_top + bar_height - (i as f64 + 1.0) * swatch_height;
        let _ = write!(
            out,
            "\n<rect x=\"{bar_x:.1}\" y=\"{y:.1}\" width=\"{bar_width}\" height=\"{swatch_height:.2}\" fill=\"{color}\"/>"
        );
    }

    let low = figure.mapper.low();
    let high = figure.mapper.high();
    let label_x = bar_x + bar_width + figure.color_bar.label_standoff as f64;
    for i in 0..=n {
        let value = low + (high - low) * i as f64 / n as f64;
        let y = bar_top + bar_height - i as f64 * swatch_height;
        let _ = write!(
            out,
            "\n<text x=\"{label_x:.1}\" y=\"{:.1}\">{}</text>",
            y + 4.0,
            escape(&format_numeral(value, &figure.color_bar.format))
        );
    }
    out.push_str("\n</g>");
    out
}

/// Equirectangular projection of the source's bounding box into the plot
/// area, aspect-preserving and centered.
struct Viewport {
    min_x: f64,
    min_y: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    drawable_h: f64,
}

impl Viewport {
    fn fit(figure: &Figure, source: &GeoJsonSource) -> Self {
        let drawable_w = figure.width as f64 - COLOR_BAR_GUTTER - 2.0 * MARGIN;
        let drawable_h = figure.height as f64 - TITLE_BAND - 2.0 * MARGIN;

        let (min_x, min_y, max_x, max_y) =
            bounds(source).unwrap_or((-180.0, -90.0, 180.0, 90.0));
        let span_x = (max_x - min_x).max(f64::EPSILON);
        let span_y = (max_y - min_y).max(f64::EPSILON);
        let scale = (drawable_w / span_x).min(drawable_h / span_y);

        Viewport {
            min_x,
            min_y,
            scale,
            offset_x: MARGIN + (drawable_w - span_x * scale) / 2.0,
            offset_y: TITLE_BAND + MARGIN + (drawable_h - span_y * scale) / 2.0,
            drawable_h: span_y * scale,
        }
    }

    fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let x = self.offset_x + (lon - self.min_x) * self.scale;
        // SVG y grows downward; latitude grows upward.
        let y = self.offset_y + self.drawable_h - (lat - self.min_y) * self.scale;
        (x, y)
    }
}

fn bounds(source: &GeoJsonSource) -> Option<(f64, f64, f64, f64)> {
    let mut b: Option<(f64, f64, f64, f64)> = None;
    let mut take = |position: &[f64]| {
        let (lon, lat) = (position[0], position[1]);
        b = Some(match b {
            None => (lon, lat, lon, lat),
            Some((min_x, min_y, max_x, max_y)) => (
                min_x.min(lon),
                min_y.min(lat),
                max_x.max(lon),
                max_y.max(lat),
            ),
        });
    };

    for feature in source.features() {
        if let Some(geometry) = &feature.geometry {
            match &geometry.value {
                Value::Polygon(rings) => {
                    rings.iter().flatten().for_each(|p| take(p));
                }
                Value::MultiPolygon(polys) => {
                    polys.iter().flatten().flatten().for_each(|p| take(p));
                }
                _ => {}
            }
        }
    }
    b
}

/// Minimal XML text escaping for labels and tooltips.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
