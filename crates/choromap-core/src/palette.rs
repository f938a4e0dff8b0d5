// crates/choromap-core/src/palette.rs

//! Color palette and the linear value → color mapping.

/// ColorBrewer "Blues" 8-class sequential palette, dark to light (the brewer
/// ordering).
pub const BLUES_8: [&str; 8] = [
    "#084594", "#2171b5", "#4292c6", "#6baed6", "#9ecae1", "#c6dbef", "#deebf7", "#f7fbff",
];

/// Blues palette reversed so that dark blue is the highest value.
pub fn blues_8_reversed() -> Vec<&'static str> {
    let mut palette: Vec<&'static str> = BLUES_8.to_vec();
    palette.reverse();
    palette
}

/// Linearly maps numbers in `[low, high]` into a sequence of colors.
///
/// Values outside the range clamp to the palette ends.
#[derive(Clone, Debug)]
pub struct LinearColorMapper {
    palette: Vec<&'static str>,
    low: f64,
    high: f64,
}

impl LinearColorMapper {
    pub fn new(palette: Vec<&'static str>, low: f64, high: f64) -> Self {
        assert!(!palette.is_empty(), "palette must have at least one color");
        LinearColorMapper { palette, low, high }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn palette(&self) -> &[&'static str] {
        &self.palette
    }

    /// Color bin for `value`.
    pub fn color(&self, value: f64) -> &'static str {
        let n = self.palette.len();
        if self.high <= self.low {
            return self.palette[0];
        }
        let t = (value - self.low) / (self.high - self.low);
        let idx = (t * n as f64).floor() as i64;
        let idx = idx.clamp(0, n as i64 - 1) as usize;
        self.palette[idx]
    }
}

/// Formats `value` per a numeral-style pattern.
///
/// Only the two patterns the format table uses are supported: "0,0"
/// (thousands separators) and "$0,0" (same, with a dollar prefix).
pub fn format_numeral(value: f64, pattern: &str) -> String {
    let prefix = if pattern.starts_with('$') { "$" } else { "" };
    let rounded = value.round() as i64;
    format!("{prefix}{}", group_thousands(rounded))
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapper_clamps_out_of_range_values() {
        let m = LinearColorMapper::new(blues_8_reversed(), 0.0, 800.0);
        // Below range: lightest. Above range: darkest.
        assert_eq!(m.color(-10.0), "#f7fbff");
        assert_eq!(m.color(10_000.0), "#084594");
        assert_eq!(m.color(800.0), "#084594");
    }

    #[test]
    fn mapper_bins_are_linear() {
        let m = LinearColorMapper::new(blues_8_reversed(), 0.0, 8.0);
        assert_eq!(m.color(0.0), "#f7fbff");
        assert_eq!(m.color(0.5), "#f7fbff");
        assert_eq!(m.color(1.5), "#deebf7");
        assert_eq!(m.color(7.5), "#084594");
    }

    #[test]
    fn degenerate_range_maps_to_first_color() {
        let m = LinearColorMapper::new(blues_8_reversed(), 5.0, 5.0);
        assert_eq!(m.color(5.0), "#f7fbff");
    }

    #[test]
    fn numeral_patterns() {
        assert_eq!(format_numeral(37172386.0, "0,0"), "37,172,386");
        assert_eq!(format_numeral(1450000.0, "$0,0"), "$1,450,000");
        assert_eq!(format_numeral(0.0, "0,0"), "0");
        assert_eq!(format_numeral(-1234.0, "0,0"), "-1,234");
        assert_eq!(format_numeral(999.4, "0,0"), "999");
    }
}
