//! modkit - Development kit for modules.
//!
//! Before a command runs, modkit works out which runtime and engine versions
//! it should target and checks that it is running somewhere sensible.
//!
//! # Modules
//!
//! - [`catalog`] - Known engine releases and platform mappings
//! - [`cli`] - Command-line interface and argument parsing
//! - [`environment`] - Version directives, resolution and interactivity
//! - [`error`] - Error types and result aliases
//! - [`module`] - Module discovery, layout and compatibility checks
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use modkit::catalog::BuiltinCatalog;
//! use modkit::environment::{VersionDirectives, VersionOptionValidator, VersionSourceResolver};
//! use modkit::ui::MockUI;
//! use std::collections::HashMap;
//!
//! let mut env = HashMap::new();
//! env.insert("MODKIT_PLATFORM_VERSION".to_string(), "2017.3".to_string());
//!
//! let mut ui = MockUI::new();
//! let directives = VersionDirectives::collect(None, None, &env);
//! VersionOptionValidator::validate(&directives, &mut ui).unwrap();
//!
//! let catalog = BuiltinCatalog::embedded().unwrap();
//! let resolved = VersionSourceResolver::new(&catalog)
//!     .resolve(&directives, None, &mut ui)
//!     .unwrap();
//! assert_eq!(resolved.engine_version().unwrap().to_string(), "5.3.6");
//! ```

pub mod catalog;
pub mod cli;
pub mod environment;
pub mod error;
pub mod module;
pub mod ui;

pub use error::{ModkitError, Result};
pub use module::VERSION;
