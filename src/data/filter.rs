use std::collections::HashMap;

use super::model::{Table, Value};
use crate::error::{Result, TableError};

// ---------------------------------------------------------------------------
// Grouping helpers: distinct values and the rows that carry them
// ---------------------------------------------------------------------------

/// Distinct values of a column in first-seen row order.
pub fn unique_values(table: &Table, column: &str) -> Result<Vec<Value>> {
    Ok(partition_by(table, column)?
        .into_iter()
        .map(|(value, _)| value)
        .collect())
}

/// Split `rows` (a subset of the table, in order) by the value each carries in
/// `column`. Groups appear in first-seen order; rows keep their relative order.
pub fn group_rows(table: &Table, column: &str, rows: &[usize]) -> Result<Vec<(Value, Vec<usize>)>> {
    let values = &table.column(column)?.values;
    let mut slot: HashMap<&Value, usize> = HashMap::new();
    let mut groups: Vec<(Value, Vec<usize>)> = Vec::new();

    for &row in rows {
        let value = values.get(row).ok_or(TableError::RowOutOfBounds {
            row,
            len: table.len(),
        })?;
        let idx = *slot.entry(value).or_insert_with(|| {
            groups.push((value.clone(), Vec::new()));
            groups.len() - 1
        });
        groups[idx].1.push(row);
    }
    Ok(groups)
}

/// [`group_rows`] over every row of the table.
pub fn partition_by(table: &Table, column: &str) -> Result<Vec<(Value, Vec<usize>)>> {
    let all: Vec<usize> = (0..table.len()).collect();
    group_rows(table, column, &all)
}
