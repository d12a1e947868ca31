use anyhow::{Context, Result};

use jke_utilities::data::filter::{group_rows, partition_by};
use jke_utilities::{
    Column, Figure, PlotStyle, SubplotSpec, Table, linear_interpolation, rolling_average,
    subplot_by_category,
};

use crate::demo::{DemoData, VALUE_COLUMN};

/// Column added to the table with the rolling mean of [`VALUE_COLUMN`].
pub const SMOOTHED_COLUMN: &str = "rolling_mean";

/// Columns offered as category / hue choices.
pub const GROUPING_COLUMNS: [&str; 2] = ["year", "site"];

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Source table, never modified.
    pub table: Table,

    /// Rows of [`VALUE_COLUMN`] flagged as missing.
    pub gaps: Vec<usize>,

    pub style: PlotStyle,

    /// Column whose values get one sub-plot each.
    pub category: String,

    /// Hue column; empty means one series per sub-plot.
    pub hue: String,

    /// Rolling-mean window in rows.
    pub window: usize,

    /// Whether flagged gaps are interpolated before smoothing.
    pub interpolate: bool,

    /// Figure built from the current settings.
    pub figure: Option<Figure>,

    /// Gaps the last interpolation could not fill.
    pub uninterpolated: Vec<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(demo: DemoData, style: PlotStyle) -> Self {
        let mut state = Self {
            table: demo.table,
            gaps: demo.gaps,
            style,
            category: GROUPING_COLUMNS[0].to_string(),
            hue: GROUPING_COLUMNS[1].to_string(),
            window: 7,
            interpolate: true,
            figure: None,
            uninterpolated: Vec::new(),
            status_message: None,
        };
        state.rebuild();
        state
    }

    /// Recompute the figure after a settings change.
    pub fn rebuild(&mut self) {
        match self.build_figure() {
            Ok(figure) => {
                self.figure = Some(figure);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to build figure: {e:#}");
                self.figure = None;
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    fn build_figure(&mut self) -> Result<Figure> {
        let filled;
        let source = if self.interpolate {
            let out = linear_interpolation(&self.table, &self.gaps, VALUE_COLUMN)
                .context("interpolating gaps")?;
            self.uninterpolated = out.uninterpolated;
            filled = out.data;
            &filled
        } else {
            self.uninterpolated = self.gaps.clone();
            &self.table
        };

        let smoothed = smooth_per_group(source, &self.category, &self.hue, self.window)
            .context("computing rolling mean")?;
        let table = source
            .clone()
            .with_column(smoothed)
            .context("attaching rolling mean")?;

        let x_lim = finite_range(&table.numeric_column("day")?);
        let y_lim = padded(finite_range(&table.numeric_column(VALUE_COLUMN)?));
        let spec = SubplotSpec::new(
            &self.category,
            "day",
            SMOOTHED_COLUMN,
            &self.hue,
            x_lim,
            y_lim,
        );
        Ok(subplot_by_category(&table, &spec, &self.style)?)
    }

    /// Serialize the current figure to `path`.
    pub fn export_figure(&self, path: &str) -> Result<()> {
        let figure = self.figure.as_ref().context("no figure to export")?;
        let json = figure.to_json().context("serializing figure")?;
        std::fs::write(path, json).with_context(|| format!("writing {path}"))?;
        Ok(())
    }
}

/// Rolling mean of [`VALUE_COLUMN`] computed separately inside every
/// (category, hue) group, so windows never straddle two series.
fn smooth_per_group(table: &Table, category: &str, hue: &str, window: usize) -> Result<Column> {
    let values = table.numeric_column(VALUE_COLUMN)?;
    let mut smoothed = vec![f64::NAN; table.len()];

    let mut groups = partition_by(table, category)?;
    if !hue.is_empty() {
        groups = groups
            .into_iter()
            .map(|(_, rows)| group_rows(table, hue, &rows))
            .collect::<std::result::Result<Vec<_>, _>>()?
            .into_iter()
            .flatten()
            .collect();
    }

    for (_, rows) in groups {
        let series: Vec<f64> = rows.iter().map(|&r| values[r]).collect();
        for (&row, mean) in rows.iter().zip(rolling_average(&series, window)) {
            smoothed[row] = mean;
        }
    }
    Ok(Column::new(SMOOTHED_COLUMN, smoothed))
}

fn finite_range(values: &[f64]) -> (f64, f64) {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let min = finite.clone().fold(f64::INFINITY, f64::min);
    let max = finite.fold(f64::NEG_INFINITY, f64::max);
    if min > max {
        (0.0, 1.0)
    } else {
        (min, max)
    }
}

fn padded((lo, hi): (f64, f64)) -> (f64, f64) {
    let pad = ((hi - lo) * 0.1).max(f64::EPSILON);
    (lo - pad, hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    #[test]
    fn default_state_builds_one_subplot_per_year() {
        let state = AppState::new(demo::generate(42).unwrap(), PlotStyle::default());
        let figure = state.figure.as_ref().unwrap();
        assert_eq!(figure.len(), 3);
        assert!(figure.subplots.iter().all(|sp| sp.series.len() == 2));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn disabling_interpolation_reports_every_gap() {
        let mut state = AppState::new(demo::generate(42).unwrap(), PlotStyle::default());
        state.interpolate = false;
        state.rebuild();
        assert_eq!(state.uninterpolated, state.gaps);
    }

    #[test]
    fn bad_category_surfaces_as_status() {
        let mut state = AppState::new(demo::generate(42).unwrap(), PlotStyle::default());
        state.category = "nope".to_string();
        state.rebuild();
        assert!(state.figure.is_none());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn smoothing_stays_inside_groups() {
        let t = Table::new(vec![
            Column::new("g", ["a", "b", "a", "b"]),
            Column::new(VALUE_COLUMN, [1.0, 100.0, 3.0, 300.0]),
        ])
        .unwrap();
        let col = smooth_per_group(&t, "g", "", 2).unwrap();
        let v: Vec<f64> = col.values.iter().filter_map(|v| v.as_f64()).collect();
        assert_eq!(v, vec![1.0, 100.0, 2.0, 200.0]);
    }
}
