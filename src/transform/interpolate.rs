use std::collections::HashSet;

use crate::data::model::{Table, Value};
use crate::error::{Result, TableError};

// ---------------------------------------------------------------------------
// Single-gap linear interpolation
// ---------------------------------------------------------------------------

/// Outcome of [`linear_interpolation`].
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    /// Copy of the input table with the fillable gaps filled.
    pub data: Table,
    /// `true` iff every requested index was filled.
    pub complete: bool,
    /// Requested indices left untouched because a neighbour was also requested.
    pub uninterpolated: Vec<usize>,
}

/// Fill the cells of `column` at `indices` with the mean of the rows directly
/// above and below.
///
/// An index whose previous or next row is itself in `indices` is skipped and
/// reported in [`Interpolation::uninterpolated`]; runs of two or more gaps are
/// never filled. Neighbours are read from the caller's table, so no fill ever
/// sees another fill from the same call. The caller's table is not modified.
///
/// Errors:
/// * [`TableError::MissingColumn`] if `column` does not exist.
/// * [`TableError::RowOutOfBounds`] if an index to fill lies outside the table.
/// * [`TableError::EdgeRow`] if an index to fill is the first or last row, so
///   one of its neighbours lies outside the table.
/// * [`TableError::NotNumeric`] if a neighbour cell is not numeric.
pub fn linear_interpolation(table: &Table, indices: &[usize], column: &str) -> Result<Interpolation> {
    table.column(column)?;

    let flagged: HashSet<usize> = indices.iter().copied().collect();
    let mut data = table.clone();
    let mut uninterpolated = Vec::new();

    for &row in indices {
        let prev_flagged = row.checked_sub(1).is_some_and(|p| flagged.contains(&p));
        let next_flagged = row.checked_add(1).is_some_and(|n| flagged.contains(&n));
        if prev_flagged || next_flagged {
            uninterpolated.push(row);
            continue;
        }

        let (prior, latter) = neighbours(table, row, column)?;
        data.set_value(row, column, Value::Float((prior + latter) / 2.0))?;
    }

    let complete = uninterpolated.is_empty();
    if !complete {
        log::warn!(
            "column '{column}': the following rows were not interpolated: {uninterpolated:?}"
        );
    }

    Ok(Interpolation {
        data,
        complete,
        uninterpolated,
    })
}

/// Numeric values of the rows either side of `row`.
fn neighbours(table: &Table, row: usize, column: &str) -> Result<(f64, f64)> {
    let len = table.len();
    if row >= len {
        return Err(TableError::RowOutOfBounds { row, len });
    }
    if row == 0 || row + 1 == len {
        return Err(TableError::EdgeRow { row, len });
    }
    let prior = table.numeric_value(row - 1, column)?;
    let latter = table.numeric_value(row + 1, column)?;
    Ok((prior, latter))
}
