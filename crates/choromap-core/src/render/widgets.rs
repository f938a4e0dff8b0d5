// crates/choromap-core/src/render/widgets.rs

//! The year/criteria UI widgets.
//!
//! Both widgets are instantiated and emitted on the page, but their change
//! handlers are not wired in this version: moving the slider or picking a
//! criteria has no effect on the rendered plot. They are emitted disabled so
//! the page does not pretend otherwise.

use super::svg::escape;
use std::fmt::Write as _;

/// A year slider.
#[derive(Clone, Debug)]
pub struct Slider {
    pub title: String,
    pub start: u16,
    pub end: u16,
    pub step: u16,
    pub value: u16,
}

impl Slider {
    /// The standard year slider: 2009–2018, starting at 2018.
    pub fn year() -> Self {
        Slider {
            title: "Year".to_string(),
            start: 2009,
            end: 2018,
            step: 1,
            value: 2018,
        }
    }
}

/// A criteria dropdown.
#[derive(Clone, Debug)]
pub struct Select {
    pub title: String,
    pub value: String,
    pub options: Vec<String>,
}

impl Select {
    /// The standard criteria selector. Only the two criteria the format
    /// table labels are offered for now.
    pub fn criteria() -> Self {
        Select {
            title: "Select Criteria:".to_string(),
            value: "Median Sales Price".to_string(),
            options: vec![
                "Median Sales Price".to_string(),
                "Minimum Income Required".to_string(),
            ],
        }
    }
}

#[derive(Clone, Debug)]
pub enum Widget {
    Slider(Slider),
    Select(Select),
}

impl Widget {
    pub fn to_html(&self) -> String {
        match self {
            Widget::Slider(s) => {
                format!(
                    "<label>{} <input type=\"range\" min=\"{}\" max=\"{}\" step=\"{}\" value=\"{}\" disabled> {}</label>",
                    escape(&s.title),
                    s.start,
                    s.end,
                    s.step,
                    s.value,
                    s.value
                )
            }
            Widget::Select(s) => {
                let mut html = format!("<label>{} <select disabled>", escape(&s.title));
                for option in &s.options {
                    let selected = if *option == s.value { " selected" } else { "" };
                    let _ = write!(html, "<option{selected}>{}</option>", escape(option));
                }
                html.push_str("</select></label>");
                html
            }
        }
    }
}
