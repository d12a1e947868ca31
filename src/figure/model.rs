use serde::Serialize;

use super::style::TitleStyle;
use crate::color::Rgb;

// ---------------------------------------------------------------------------
// Figure – renderer-agnostic description of stacked line plots
// ---------------------------------------------------------------------------

/// A figure of vertically stacked sub-plots, top to bottom.
///
/// Export-only: gaps are NaN points, which JSON can only carry as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub width: f32,
    pub height: f32,
    pub subplots: Vec<Subplot>,
}

/// One axes of the figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subplot {
    pub title: String,
    pub title_style: TitleStyle,
    pub x_label: String,
    pub y_label: String,
    /// `(min, max)` of the x axis.
    pub x_lim: (f64, f64),
    /// `(min, max)` of the y axis.
    pub y_lim: (f64, f64),
    pub series: Vec<Series>,
}

/// A single polyline; points are kept in table row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub color: Rgb,
    pub width: f32,
    pub points: Vec<[f64; 2]>,
}

impl Figure {
    pub fn len(&self) -> usize {
        self.subplots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subplots.is_empty()
    }

    /// Serialize the figure for export. NaN coordinates are written as `null`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Subplot {
    /// Title anchor in data coordinates, derived from the relative title style.
    pub fn title_anchor(&self) -> [f64; 2] {
        let (x0, x1) = self.x_lim;
        let (y0, y1) = self.y_lim;
        [
            x0 + (x1 - x0) * self.title_style.x as f64,
            y0 + (y1 - y0) * self.title_style.y as f64,
        ]
    }
}
