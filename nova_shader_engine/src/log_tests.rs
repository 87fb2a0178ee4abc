//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger and the global
//! logger slot. Tests that swap the global logger are serialized.

use crate::log::{self, Logger, LogEntry, LogSeverity, DefaultLogger};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;
use serial_test::serial;

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_debug() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Error), "Error");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_clone() {
    let entry = LogEntry {
        severity: LogSeverity::Info,
        timestamp: SystemTime::now(),
        source: "nova::test".to_string(),
        message: "hello".to_string(),
        file: None,
        line: None,
    };
    let cloned = entry.clone();
    assert_eq!(cloned.source, "nova::test");
    assert_eq!(cloned.message, "hello");
}

#[test]
fn test_default_logger_does_not_panic() {
    let logger = DefaultLogger;
    logger.log(&LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "nova::test".to_string(),
        message: "error with location".to_string(),
        file: Some("log_tests.rs"),
        line: Some(1),
    });
}

// ============================================================================
// GLOBAL LOGGER SLOT TESTS
// ============================================================================

/// Logger that captures entries into a shared vector
struct CaptureLogger {
    entries: Arc<Mutex<Vec<(LogSeverity, String, String)>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push((
            entry.severity,
            entry.source.clone(),
            entry.message.clone(),
        ));
    }
}

#[test]
#[serial]
fn test_set_logger_captures_macro_output() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    log::set_logger(CaptureLogger { entries: entries.clone() });

    crate::engine_info!("nova::test", "compiled {} programs", 3);
    crate::engine_warn!("nova::test", "slow compile");

    let captured = entries.lock().unwrap().clone();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].0, LogSeverity::Info);
    assert_eq!(captured[0].1, "nova::test");
    assert_eq!(captured[0].2, "compiled 3 programs");
    assert_eq!(captured[1].0, LogSeverity::Warn);

    log::reset_logger();
}

#[test]
#[serial]
fn test_engine_error_carries_file_and_line() {
    struct FileLineLogger {
        saw_location: Arc<Mutex<bool>>,
    }
    impl Logger for FileLineLogger {
        fn log(&self, entry: &LogEntry) {
            if entry.file.is_some() && entry.line.is_some() {
                *self.saw_location.lock().unwrap() = true;
            }
        }
    }

    let saw_location = Arc::new(Mutex::new(false));
    log::set_logger(FileLineLogger { saw_location: saw_location.clone() });

    crate::engine_error!("nova::test", "boom");

    assert!(*saw_location.lock().unwrap());
    log::reset_logger();
}
