use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Plot style – explicit formatting passed to the subplotter
// ---------------------------------------------------------------------------

/// Figure-level formatting.
///
/// Every field has a default, so a JSON document only needs the keys it
/// overrides:
///
/// ```json
/// { "height_per_plot": 2.5, "title": { "font_weight": "normal", "y": 0.1 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    /// Figure width, independent of the number of sub-plots.
    pub width: f32,
    /// Height contributed by each stacked sub-plot.
    pub height_per_plot: f32,
    /// Stroke width of every line series.
    pub line_width: f32,
    pub title: TitleStyle,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 10.0,
            height_per_plot: 3.0,
            line_width: 1.5,
            title: TitleStyle::default(),
        }
    }
}

impl PlotStyle {
    /// Parse a (possibly partial) style from JSON.
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Total figure height for `n_plots` stacked sub-plots.
    pub fn figure_height(&self, n_plots: usize) -> f32 {
        self.height_per_plot * n_plots as f32
    }
}

/// Placement and weight of each sub-plot title.
///
/// `x` and `y` are fractions of the axes, measured from the left and from the
/// bottom. The default puts the title near the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleStyle {
    pub x: f32,
    pub y: f32,
    pub font_weight: FontWeight,
    pub font_size: f32,
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self {
            x: 0.05,
            y: 0.9,
            font_weight: FontWeight::Bold,
            font_size: 14.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    #[default]
    Bold,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let style =
            PlotStyle::from_json_str(r#"{ "width": 12.0, "title": { "font_weight": "normal" } }"#)
                .unwrap();
        assert_eq!(style.width, 12.0);
        assert_eq!(style.height_per_plot, 3.0);
        assert_eq!(style.title.font_weight, FontWeight::Normal);
        assert_eq!(style.title.x, 0.05);
    }

    #[test]
    fn unknown_font_weight_is_rejected() {
        assert!(PlotStyle::from_json_str(r#"{ "title": { "font_weight": "heavy" } }"#).is_err());
    }

    #[test]
    fn height_scales_with_plot_count() {
        let style = PlotStyle::default();
        assert_eq!(style.figure_height(0), 0.0);
        assert_eq!(style.figure_height(4), 12.0);
    }
}
