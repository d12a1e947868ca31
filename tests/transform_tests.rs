//! Tests for the column transforms.
//!
//! ## Test Organization
//!
//! 1. **Interpolation** - isolated gaps, clustered gaps, caller table safety
//! 2. **Rolling Average** - documented example, length, prefix averaging

use approx::assert_relative_eq;

use jke_utilities::{
    Column, Table, TableError, Value, linear_interpolation, rolling_average,
};

fn series(values: &[Option<f64>]) -> Table {
    Table::new(vec![
        Column::new("id", (0..values.len() as i64).collect::<Vec<_>>()),
        Column::new("flow", values.to_vec()),
    ])
    .unwrap()
}

// ============================================================================
// Interpolation Tests
// ============================================================================

/// Every non-adjacent, in-range index is filled with its neighbour mean.
#[test]
fn test_interpolation_isolated_gaps() {
    let t = series(&[
        Some(2.0),
        None,
        Some(4.0),
        Some(7.0),
        None,
        Some(9.0),
        None,
        Some(-1.0),
    ]);
    let indices = [1, 4, 6];
    let out = linear_interpolation(&t, &indices, "flow").unwrap();

    assert!(out.complete);
    for &i in &indices {
        let expected =
            (t.numeric_value(i - 1, "flow").unwrap() + t.numeric_value(i + 1, "flow").unwrap()) / 2.0;
        assert_relative_eq!(out.data.numeric_value(i, "flow").unwrap(), expected);
    }
    // 4 and 6 share neighbour 5, which is never written
    assert_relative_eq!(out.data.numeric_value(5, "flow").unwrap(), 9.0);
}

/// Clustered indices are all skipped and reported; the rest still fill.
#[test]
fn test_interpolation_clustered_gaps() {
    let t = series(&[
        Some(0.0),
        None,
        None,
        None,
        Some(4.0),
        None,
        Some(6.0),
    ]);
    let out = linear_interpolation(&t, &[5, 1, 2, 3], "flow").unwrap();

    assert!(!out.complete);
    assert_eq!(out.uninterpolated, vec![1, 2, 3]);
    assert_relative_eq!(out.data.numeric_value(5, "flow").unwrap(), 5.0);
    for i in 1..=3 {
        assert_eq!(out.data.value(i, "flow").unwrap(), &Value::Null);
    }
}

/// The caller's table is never modified.
#[test]
fn test_interpolation_leaves_input_alone() {
    let t = series(&[Some(1.0), None, Some(5.0), None, None, Some(0.0)]);
    let snapshot = t.clone();
    let _ = linear_interpolation(&t, &[1, 3, 4], "flow").unwrap();
    assert_eq!(t, snapshot);
}

/// Only the target column changes.
#[test]
fn test_interpolation_touches_one_column() {
    let t = series(&[Some(1.0), None, Some(5.0)]);
    let out = linear_interpolation(&t, &[1], "flow").unwrap();
    assert_eq!(out.data.column("id").unwrap(), t.column("id").unwrap());
}

/// Errors propagate instead of being swallowed.
#[test]
fn test_interpolation_errors() {
    let t = series(&[Some(1.0), None, Some(5.0)]);
    assert_eq!(
        linear_interpolation(&t, &[1], "level"),
        Err(TableError::MissingColumn {
            column: "level".to_string()
        })
    );
    assert!(matches!(
        linear_interpolation(&t, &[0], "flow"),
        Err(TableError::EdgeRow { row: 0, len: 3 })
    ));
}

// ============================================================================
// Rolling Average Tests
// ============================================================================

#[test]
fn test_rolling_average_documented_example() {
    let out = rolling_average(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], 2);
    assert_eq!(out, vec![0.0, 0.5, 1.5, 2.5, 3.5, 4.5]);
}

/// Output length matches input and the first point passes through.
#[test]
fn test_rolling_average_shape() {
    let data: Vec<f64> = (0..25).map(|i| ((i * 7) % 11) as f64 - 3.0).collect();
    for window in [1, 2, 5, 24, 25, 100] {
        let out = rolling_average(&data, window);
        assert_eq!(out.len(), data.len());
        assert_eq!(out[0], data[0]);
    }
}

/// A window of at least the series length averages the whole prefix.
#[test]
fn test_rolling_average_full_prefix() {
    let data = [5.0, 1.0, 0.0, 10.0, 2.5];
    let out = rolling_average(&data, data.len());
    let mut sum = 0.0;
    for (k, &v) in data.iter().enumerate() {
        sum += v;
        assert_relative_eq!(out[k], sum / (k + 1) as f64, epsilon = 1e-12);
    }
}

/// Trailing window of fixed size once it is full.
#[test]
fn test_rolling_average_trailing_window() {
    let data: Vec<f64> = (0..10).map(|i| (i * i) as f64).collect();
    let out = rolling_average(&data, 4);
    for k in 3..data.len() {
        let mean = data[k - 3..=k].iter().sum::<f64>() / 4.0;
        assert_relative_eq!(out[k], mean, epsilon = 1e-12);
    }
}
