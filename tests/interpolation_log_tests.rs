//! Tests for the diagnostic emitted when interpolation is incomplete.
//!
//! Installs a recording logger for this test binary; every test here reads
//! the records produced by its own call.

use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

use jke_utilities::{Column, Table, linear_interpolation};

struct RecordingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for RecordingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: RecordingLogger = RecordingLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn warnings_mentioning(column: &str) -> Vec<String> {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, msg)| *level == Level::Warn && msg.contains(column))
        .map(|(_, msg)| msg.clone())
        .collect()
}

fn table(column: &str) -> Table {
    Table::new(vec![Column::new(
        column,
        [Some(1.0), None, None, Some(4.0), None, Some(6.0)],
    )])
    .unwrap()
}

/// Unfilled rows are reported at warn level, listing the row positions.
#[test]
fn test_incomplete_interpolation_warns_with_rows() {
    warnings_mentioning("");
    let out = linear_interpolation(&table("gauge_a"), &[1, 2, 4], "gauge_a").unwrap();
    assert!(!out.complete);

    let warnings = warnings_mentioning("gauge_a");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("[1, 2]"));
}

/// A complete run stays silent.
#[test]
fn test_complete_interpolation_is_silent() {
    warnings_mentioning("");
    let out = linear_interpolation(&table("gauge_b"), &[4], "gauge_b").unwrap();
    assert!(out.complete);
    assert!(warnings_mentioning("gauge_b").is_empty());
}
