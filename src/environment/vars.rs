//! Read-only access to environment variables.
//!
//! Preflight code never calls `std::env::var` directly; it goes through an
//! [`EnvLookup`] so tests can simulate variables without touching the real
//! process environment.

use std::collections::HashMap;

/// Forces the interactive frontend on or off.
pub const FRONTEND_VAR: &str = "MODKIT_FRONTEND";

/// Overrides the target tool (engine) version.
pub const TOOL_VERSION_VAR: &str = "MODKIT_TOOL_VERSION";

/// Overrides the target platform version.
pub const PLATFORM_VERSION_VAR: &str = "MODKIT_PLATFORM_VERSION";

/// Path to a version catalog file replacing the built-in one.
pub const CATALOG_VAR: &str = "MODKIT_CATALOG";

/// A source of environment variable values.
pub trait EnvLookup {
    /// Look up a variable. Unset and non-UTF-8 values are both `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a variable, treating an empty value as unset.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}
