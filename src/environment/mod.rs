//! Target environment preflight.
//!
//! Determines which runtime and engine versions a command runs against and
//! whether the session may prompt. The version priority chain is:
//!
//! 1. `--tool-version` / `--platform-version` flag
//! 2. `MODKIT_TOOL_VERSION` / `MODKIT_PLATFORM_VERSION` variable
//! 3. The engine requirement in metadata.json
//! 4. The latest release known to the catalog
//!
//! Conflicting directives are rejected by [`VersionOptionValidator`] before
//! [`VersionSourceResolver`] runs.

pub mod directive;
pub mod interactive;
pub mod resolver;
pub mod validator;
pub mod vars;

pub use directive::{DirectiveOrigin, VersionDirective, VersionDirectives, VersionKind};
pub use interactive::InteractivityDetector;
pub use resolver::{ResolutionSource, ResolvedEnvironment, VersionSourceResolver};
pub use validator::{PairOutcome, VersionOptionValidator};
pub use vars::{EnvLookup, ProcessEnv};
