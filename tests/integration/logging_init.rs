//! Integration tests for logging initialization.
//!
//! Installs the global subscriber once, writing to a file, and verifies that
//! scope transitions and misuse show up in the written log.

use super::test_utils::with_env_vars;
use scoped_context::error::ConfigurationError;
use scoped_context::logging::{init_logging, LoggingConfig};
use scoped_context::{ContextManager, ContextOptions};
use std::fs;
use tempfile::TempDir;

const LABEL: &str = "logging-init";

fn lines_with<'a>(log: &'a str, message: &str) -> Vec<&'a str> {
    log.lines()
        .filter(|line| line.contains(message) && line.contains(LABEL))
        .collect()
}

#[test]
fn test_file_logging_records_scope_events() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("logs").join("scopes.log");

    // Config asks for silence on stdout; the environment overrides both.
    let config = LoggingConfig {
        level: "off".to_string(),
        output: "stdout".to_string(),
        file: log_file.clone(),
        ..LoggingConfig::default()
    };
    with_env_vars(
        &[
            ("SCOPED_CONTEXT_LOG", "trace"),
            ("SCOPED_CONTEXT_LOG_OUTPUT", "file"),
            ("SCOPED_CONTEXT_LOG_FORMAT", "text"),
        ],
        || init_logging(Some(&config)).unwrap(),
    );

    let manager = ContextManager::create(ContextOptions::default().label(LABEL));
    let first = manager.enter(1).unwrap();
    let second = manager.enter(2).unwrap();
    assert!(manager.leave(first).is_err());

    let guard = manager.enter_scope(3).unwrap();
    let on_top = manager.enter(4).unwrap();
    drop(guard);
    assert_eq!(manager.leave(on_top).unwrap(), 4);
    assert_eq!(manager.depth(), 3);
    manager.leave(second).unwrap_err();

    let log = fs::read_to_string(&log_file).unwrap();

    let entered = lines_with(&log, "entered scope");
    assert!(entered.len() >= 4, "missing enter events:\n{}", log);
    assert!(entered.iter().all(|line| line.contains("TRACE")));

    let mismatches = lines_with(&log, "scope left out of order");
    assert!(!mismatches.is_empty(), "missing mismatch event:\n{}", log);
    assert!(mismatches.iter().all(|line| line.contains("WARN")));

    let drop_failures = lines_with(&log, "failed to leave scope on drop");
    assert_eq!(drop_failures.len(), 1, "log:\n{}", log);
    assert!(drop_failures[0].contains("ERROR"));

    assert!(matches!(
        init_logging(None),
        Err(ConfigurationError::Logging(_))
    ));
}
