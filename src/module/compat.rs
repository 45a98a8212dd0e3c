//! Module compatibility advisories.
//!
//! Compares the running modkit version against the `modkit-version`
//! recorded in a module's metadata.json. Mismatches only ever produce a
//! warning; modkit keeps running against old and new modules alike.

use semver::Version;

use crate::error::{ModkitError, Result};
use crate::ui::UserInterface;

/// Current version of modkit.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Modules recorded with a version below this predate reliable
/// compatibility metadata.
pub const COMPAT_THRESHOLD: Version = Version::new(1, 3, 1);

/// The running modkit version.
pub fn tool_version() -> Result<Version> {
    Version::parse(VERSION).map_err(|e| ModkitError::Other(anyhow::anyhow!(e)))
}

/// The outcome of comparing a module's recorded version with ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    /// No recorded version; the module was never converted.
    NotCompatible,
    /// Recorded before [`COMPAT_THRESHOLD`].
    TemplateOutOfDate,
    /// Recorded by a newer modkit than the one running.
    NeedsNewerTool,
    /// Recorded by an older modkit; an update is available.
    BuiltForOlderTool,
    /// Recorded by exactly this version.
    Current,
}

impl Compatibility {
    /// Classify a recorded version against the running tool version.
    pub fn classify(tool_version: &Version, recorded: Option<&Version>) -> Self {
        let Some(recorded) = recorded else {
            return Self::NotCompatible;
        };

        if *recorded < COMPAT_THRESHOLD {
            Self::TemplateOutOfDate
        } else if recorded > tool_version {
            Self::NeedsNewerTool
        } else if recorded < tool_version {
            Self::BuiltForOlderTool
        } else {
            Self::Current
        }
    }

    /// The advisory shown to the user, if any.
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            Self::NotCompatible => Some(
                "This module is not modkit compatible. Run `modkit convert` to make it compatible with your version of modkit.",
            ),
            Self::TemplateOutOfDate => Some(
                "This module template is out of date. Run `modkit convert` to make it compatible with your version of modkit.",
            ),
            Self::NeedsNewerTool => Some(
                "This module is compatible with a newer version of modkit. Upgrade your version of modkit to ensure compatibility.",
            ),
            Self::BuiltForOlderTool => Some(
                "This module is compatible with an older version of modkit. Run `modkit update` to update it to your version of modkit.",
            ),
            Self::Current => None,
        }
    }
}

/// Emits the compatibility advisory for a module.
pub struct CompatibilityAdvisor;

impl CompatibilityAdvisor {
    /// Warn if the recorded version disagrees with `tool_version`.
    ///
    /// Emits at most one warning and never fails.
    pub fn check(
        tool_version: &Version,
        recorded: Option<&Version>,
        ui: &mut dyn UserInterface,
    ) -> Compatibility {
        let compatibility = Compatibility::classify(tool_version, recorded);
        tracing::debug!(
            "modkit {} vs recorded {:?}: {:?}",
            tool_version,
            recorded.map(ToString::to_string),
            compatibility
        );
        if let Some(advisory) = compatibility.advisory() {
            ui.warning(advisory);
        }
        compatibility
    }
}
