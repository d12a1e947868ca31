use crate::color::{ColorMap, Rgb};
use crate::data::filter::{group_rows, partition_by, unique_values};
use crate::data::model::Table;
use crate::error::Result;

use super::model::{Figure, Series, Subplot};
use super::style::PlotStyle;

// ---------------------------------------------------------------------------
// Per-category stacked line plots
// ---------------------------------------------------------------------------

/// Which columns to plot and the limits shared by every sub-plot.
#[derive(Debug, Clone, PartialEq)]
pub struct SubplotSpec {
    /// One sub-plot per distinct value of this column.
    pub category: String,
    pub x_var: String,
    pub y_var: String,
    /// Split each sub-plot into one series per distinct value of this column.
    pub hue_var: Option<String>,
    pub x_lim: (f64, f64),
    pub y_lim: (f64, f64),
}

impl SubplotSpec {
    /// An empty `hue_var` means "no hue grouping".
    pub fn new(
        category: &str,
        x_var: &str,
        y_var: &str,
        hue_var: &str,
        x_lim: (f64, f64),
        y_lim: (f64, f64),
    ) -> Self {
        Self {
            category: category.to_string(),
            x_var: x_var.to_string(),
            y_var: y_var.to_string(),
            hue_var: (!hue_var.is_empty()).then(|| hue_var.to_string()),
            x_lim,
            y_lim,
        }
    }
}

/// Build a figure with one stacked line plot per category value.
///
/// Sub-plots follow the first-seen order of the category values. Each one
/// draws `y_var` against `x_var` over the matching rows, in table row order
/// and without aggregation, split per hue value when a hue column is given.
/// All sub-plots share `x_lim` / `y_lim` and are titled with their category.
pub fn subplot_by_category(table: &Table, spec: &SubplotSpec, style: &PlotStyle) -> Result<Figure> {
    let xs = table.numeric_column(&spec.x_var)?;
    let ys = table.numeric_column(&spec.y_var)?;
    let categories = partition_by(table, &spec.category)?;

    let color_map = match &spec.hue_var {
        Some(hue) => Some(ColorMap::new(&unique_values(table, hue)?)),
        None => None,
    };

    let points = |rows: &[usize]| -> Vec<[f64; 2]> { rows.iter().map(|&r| [xs[r], ys[r]]).collect() };

    let mut subplots = Vec::with_capacity(categories.len());
    for (category, rows) in &categories {
        let series: Vec<Series> = match (&spec.hue_var, &color_map) {
            (Some(hue), Some(cm)) => group_rows(table, hue, rows)?
                .into_iter()
                .map(|(hue_value, hue_rows)| Series {
                    name: hue_value.to_string(),
                    color: cm.color_for(&hue_value),
                    width: style.line_width,
                    points: points(hue_rows.as_slice()),
                })
                .collect(),
            _ => vec![Series {
                name: spec.y_var.clone(),
                color: Rgb::LIGHT_BLUE,
                width: style.line_width,
                points: points(rows.as_slice()),
            }],
        };

        subplots.push(Subplot {
            title: category.to_string(),
            title_style: style.title,
            x_label: spec.x_var.clone(),
            y_label: spec.y_var.clone(),
            x_lim: spec.x_lim,
            y_lim: spec.y_lim,
            series,
        });
    }

    log::debug!(
        "built {} sub-plots of '{}' vs '{}' by '{}'",
        subplots.len(),
        spec.y_var,
        spec.x_var,
        spec.category
    );

    Ok(Figure {
        width: style.width,
        height: style.figure_height(subplots.len()),
        subplots,
    })
}
