use crate::data::model::Table;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Trailing rolling average
// ---------------------------------------------------------------------------

/// Backward-looking rolling mean over `window` points, current point included.
///
/// `output[0] == data[0]`; for `k >= 1` the mean covers
/// `data[max(0, k + 1 - window) ..= k]`, so the window grows from the start of
/// the series until it holds `window` points. A window longer than the series
/// averages the whole prefix.
///
/// ```text
/// data   = [0, 1, 2,   3,   4,   5],  window = 2
/// output = [0, 0.5, 1.5, 2.5, 3.5, 4.5]
/// ```
///
/// `window == 0` is treated like `window == 1`.
pub fn rolling_average(data: &[f64], window: usize) -> Vec<f64> {
    let Some(&first) = data.first() else {
        return Vec::new();
    };

    let window = window.max(1);
    let mut output = Vec::with_capacity(data.len());
    output.push(first);

    // `end` is exclusive: position k covers data[start..k + 1].
    for end in 2..=data.len() {
        let slice = &data[end.saturating_sub(window)..end];
        output.push(slice.iter().sum::<f64>() / slice.len() as f64);
    }
    output
}

/// [`rolling_average`] over a numeric table column (`Null` cells read as NaN).
pub fn rolling_average_column(table: &Table, column: &str, window: usize) -> Result<Vec<f64>> {
    Ok(rolling_average(&table.numeric_column(column)?, window))
}
