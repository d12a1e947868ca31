use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Date32Type, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::record_batch::RecordBatch;

use super::model::{Column, Table, Value};
use crate::error::{Result, TableError};

// ---------------------------------------------------------------------------
// Arrow interop: in-memory RecordBatch → Table
// ---------------------------------------------------------------------------

impl Table {
    /// Convert an Arrow record batch already held in memory into a [`Table`].
    ///
    /// Supported column types:
    /// * `Utf8` / `LargeUtf8` → [`Value::String`]
    /// * `Int32` / `Int64`    → [`Value::Integer`]
    /// * `Float32` / `Float64` → [`Value::Float`]
    /// * `Boolean`            → [`Value::Bool`]
    /// * `Date32`             → [`Value::Date`] (ISO-8601 text)
    ///
    /// Arrow nulls become [`Value::Null`]. Any other type is rejected.
    pub fn try_from_record_batch(batch: &RecordBatch) -> Result<Self> {
        let schema = batch.schema();
        let columns = schema
            .fields()
            .iter()
            .zip(batch.columns())
            .map(|(field, array)| {
                Ok(Column {
                    name: field.name().clone(),
                    values: extract_values(array)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Table::new(columns)
    }
}

fn extract_values(col: &ArrayRef) -> Result<Vec<Value>> {
    let values = match col.data_type() {
        DataType::Utf8 => {
            let arr = col.as_string::<i32>();
            collect_cells(col.as_ref(), |r| Value::String(arr.value(r).to_string()))
        }
        DataType::LargeUtf8 => {
            let arr = col.as_string::<i64>();
            collect_cells(col.as_ref(), |r| Value::String(arr.value(r).to_string()))
        }
        DataType::Int32 => {
            let arr = col.as_primitive::<Int32Type>();
            collect_cells(col.as_ref(), |r| Value::Integer(arr.value(r) as i64))
        }
        DataType::Int64 => {
            let arr = col.as_primitive::<Int64Type>();
            collect_cells(col.as_ref(), |r| Value::Integer(arr.value(r)))
        }
        DataType::Float32 => {
            let arr = col.as_primitive::<Float32Type>();
            collect_cells(col.as_ref(), |r| Value::Float(arr.value(r) as f64))
        }
        DataType::Float64 => {
            let arr = col.as_primitive::<Float64Type>();
            collect_cells(col.as_ref(), |r| Value::Float(arr.value(r)))
        }
        DataType::Boolean => {
            let arr = col.as_boolean();
            collect_cells(col.as_ref(), |r| Value::Bool(arr.value(r)))
        }
        DataType::Date32 => {
            let arr = col.as_primitive::<Date32Type>();
            collect_cells(col.as_ref(), |r| {
                arr.value_as_date(r)
                    .map_or(Value::Null, |d| Value::Date(d.to_string()))
            })
        }
        other => return Err(TableError::Arrow(format!("{other:?}"))),
    };
    Ok(values)
}

/// Map every non-null slot through `f`; null slots become [`Value::Null`].
fn collect_cells(col: &dyn Array, f: impl Fn(usize) -> Value) -> Vec<Value> {
    (0..col.len())
        .map(|row| if col.is_null(row) { Value::Null } else { f(row) })
        .collect()
}
