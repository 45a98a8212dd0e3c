//! Module discovery, layout checks and compatibility.
//!
//! - [`metadata`] - Finding and parsing metadata.json
//! - [`layout`] - Ensuring a command runs inside a module
//! - [`compat`] - Warning about modkit version mismatches

pub mod compat;
pub mod layout;
pub mod metadata;

pub use compat::{tool_version, Compatibility, CompatibilityAdvisor, COMPAT_THRESHOLD, VERSION};
pub use layout::{DirectoryLayoutChecker, MODULE_FOLDERS};
pub use metadata::{find_module_root, ModuleMetadata, METADATA_FILE};
