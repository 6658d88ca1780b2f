//! Shared test utilities for config module tests.

use std::sync::Mutex;

/// Mutex to serialize environment variable tests and prevent race conditions.
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Clean up environment variables used by bosun config.
///
/// Callers must hold [`ENV_MUTEX`]; the process environment is shared state.
pub fn cleanup_env_vars(vars: &[&str]) {
    for var in vars {
        // SAFETY: serialized behind ENV_MUTEX, no concurrent env access.
        unsafe { std::env::remove_var(var) };
    }
}

/// Set an environment variable for a test.
///
/// Callers must hold [`ENV_MUTEX`]; the process environment is shared state.
pub fn set_env_var(name: &str, value: &str) {
    // SAFETY: serialized behind ENV_MUTEX, no concurrent env access.
    unsafe { std::env::set_var(name, value) };
}
