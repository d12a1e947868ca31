use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Result, TableError};

// ---------------------------------------------------------------------------
// Value – a single cell of a table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring common dataframe dtypes.
/// Categories are collected into `BTreeSet` / `HashMap` downstream, so `Value`
/// must be `Ord` and `Hash`.
#[derive(Debug, Clone)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// ISO-8601 date string kept as text for simplicity.
    Date(String),
    Null,
}

// -- Manual Eq/Ord so Value can key sets; floats compare by total order --

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        use Value::*;
        fn discriminant(v: &Value) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                String(_) => 4,
                Date(_) => 5,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) | (Date(a), Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl std::hash::Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::String(s) | Value::Date(s) => s.hash(state),
            Value::Integer(i) => i.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Bool(b) => b.hash(state),
            Value::Null => {}
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Date(d) => write!(f, "{d}"),
            Value::Null => write!(f, "<null>"),
        }
    }
}

impl Value {
    /// Interpret the value as an `f64`, if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

// ---------------------------------------------------------------------------
// Column – a named vector of cells
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new<T: Into<Value>>(name: impl Into<String>, values: impl IntoIterator<Item = T>) -> Self {
        Column {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Table – the in-memory dataframe
// ---------------------------------------------------------------------------

/// Ordered, equally long named columns. Rows are addressed by their 0-based
/// position, which stays stable for the lifetime of the table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Build a table, checking column names are unique and lengths agree.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let n_rows = columns.first().map_or(0, Column::len);
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for col in &columns {
            if !seen.insert(col.name.as_str()) {
                return Err(TableError::DuplicateColumn {
                    column: col.name.clone(),
                });
            }
            if col.len() != n_rows {
                return Err(TableError::LengthMismatch {
                    column: col.name.clone(),
                    expected: n_rows,
                    got: col.len(),
                });
            }
        }
        Ok(Table { columns, n_rows })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.n_rows
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| missing(name))
    }

    fn column_mut(&mut self, name: &str) -> Result<&mut Column> {
        self.columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| missing(name))
    }

    /// Cell at `(row, column)`.
    pub fn value(&self, row: usize, column: &str) -> Result<&Value> {
        let len = self.n_rows;
        self.column(column)?
            .values
            .get(row)
            .ok_or(TableError::RowOutOfBounds { row, len })
    }

    /// Overwrite the cell at `(row, column)`.
    pub fn set_value(&mut self, row: usize, column: &str, value: Value) -> Result<()> {
        let len = self.n_rows;
        let cell = self
            .column_mut(column)?
            .values
            .get_mut(row)
            .ok_or(TableError::RowOutOfBounds { row, len })?;
        *cell = value;
        Ok(())
    }

    /// Numeric reading of a cell: `Null` becomes NaN, non-numeric is an error.
    pub fn numeric_value(&self, row: usize, column: &str) -> Result<f64> {
        to_numeric(self.value(row, column)?, row, column)
    }

    /// A whole column as `f64`s, with the same rules as [`Table::numeric_value`].
    pub fn numeric_column(&self, column: &str) -> Result<Vec<f64>> {
        self.column(column)?
            .values
            .iter()
            .enumerate()
            .map(|(row, v)| to_numeric(v, row, column))
            .collect()
    }

    /// Append a column, with the same checks as [`Table::new`].
    pub fn with_column(self, column: Column) -> Result<Table> {
        let mut columns = self.columns;
        columns.push(column);
        Table::new(columns)
    }

    /// New table holding only the given rows, in the given order.
    pub fn select_rows(&self, rows: &[usize]) -> Result<Table> {
        if let Some(&bad) = rows.iter().find(|&&r| r >= self.n_rows) {
            return Err(TableError::RowOutOfBounds {
                row: bad,
                len: self.n_rows,
            });
        }
        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                values: rows.iter().map(|&r| c.values[r].clone()).collect(),
            })
            .collect();
        Ok(Table {
            columns,
            n_rows: rows.len(),
        })
    }
}

fn missing(name: &str) -> TableError {
    TableError::MissingColumn {
        column: name.to_string(),
    }
}

fn to_numeric(value: &Value, row: usize, column: &str) -> Result<f64> {
    match value {
        Value::Null => Ok(f64::NAN),
        v => v.as_f64().ok_or_else(|| TableError::NotNumeric {
            row,
            column: column.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(vec![
            Column::new("year", [2020i64, 2020, 2021]),
            Column::new("temp", [Some(1.5), None, Some(3.0)]),
            Column::new("site", ["a", "b", "a"]),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_ragged_columns() {
        let err = Table::new(vec![
            Column::new("a", [1.0, 2.0]),
            Column::new("b", [1.0]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            TableError::LengthMismatch {
                column: "b".into(),
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = Table::new(vec![Column::new("a", [1.0]), Column::new("a", [2.0])]).unwrap_err();
        assert_eq!(err, TableError::DuplicateColumn { column: "a".into() });
    }

    #[test]
    fn numeric_column_maps_null_to_nan() {
        let t = sample();
        let temp = t.numeric_column("temp").unwrap();
        assert_eq!(temp[0], 1.5);
        assert!(temp[1].is_nan());
        assert_eq!(t.numeric_column("year").unwrap(), vec![2020.0, 2020.0, 2021.0]);
        assert!(matches!(
            t.numeric_column("site"),
            Err(TableError::NotNumeric { row: 0, .. })
        ));
    }

    #[test]
    fn value_access_reports_missing_column_and_bounds() {
        let t = sample();
        assert!(matches!(t.value(0, "nope"), Err(TableError::MissingColumn { .. })));
        assert_eq!(
            t.value(3, "temp"),
            Err(TableError::RowOutOfBounds { row: 3, len: 3 })
        );
        assert_eq!(
            t.value(usize::MAX, "temp"),
            Err(TableError::RowOutOfBounds {
                row: usize::MAX,
                len: 3
            })
        );
    }

    #[test]
    fn select_rows_keeps_requested_order() {
        let t = sample();
        let sub = t.select_rows(&[2, 0]).unwrap();
        assert_eq!(sub.len(), 2);
        assert_eq!(sub.value(0, "site").unwrap(), &Value::from("a"));
        assert_eq!(sub.value(1, "year").unwrap(), &Value::Integer(2020));
        assert!(t.select_rows(&[5]).is_err());
    }

    #[test]
    fn with_column_checks_length() {
        let t = sample().with_column(Column::new("flag", [true, false, true])).unwrap();
        assert_eq!(t.column_names(), vec!["year", "temp", "site", "flag"]);
        assert!(sample().with_column(Column::new("short", [1.0])).is_err());
    }

    #[test]
    fn float_values_use_total_order() {
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert!(Value::Integer(5) < Value::Float(0.0));
        assert!(Value::Null < Value::Bool(false));
    }
}
