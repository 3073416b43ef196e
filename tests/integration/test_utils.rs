//! Shared test utilities for integration tests
//!
//! Serializes access to process environment variables so config tests that
//! set overrides do not race each other.

use std::sync::Mutex;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Run `f` with the given environment variables set, restoring previous
/// values afterwards.
pub fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let saved: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
        .collect();

    for (key, value) in vars {
        std::env::set_var(key, value);
    }

    let result = f();

    for (key, original) in saved {
        match original {
            Some(value) => std::env::set_var(&key, value),
            None => std::env::remove_var(&key),
        }
    }

    result
}
