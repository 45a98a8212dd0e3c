//! Module metadata discovery and parsing.
//!
//! A module is identified by a `metadata.json` file at its root. modkit
//! reads two things from it: the modkit version the module was last
//! converted or updated with (`modkit-version`), and the engine version
//! requirement (the `requirements` entry named `engine`).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};

use crate::catalog::PartialVersion;
use crate::error::{ModkitError, Result};

/// Name of the file that marks a module root.
pub const METADATA_FILE: &str = "metadata.json";

/// Name of the requirement entry that constrains the engine version.
pub const ENGINE_REQUIREMENT: &str = "engine";

/// One comparator at the start of the remaining text, e.g. `>= 4.7.0`.
static COMPARATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(~>|>=|<=|>|<|=|~|\^)?\s*(\d+(?:\.(?:\d+|[xX*])){0,2})")
        .expect("COMPARATOR_REGEX must compile")
});

/// An inclusive range written as `4.7.0 - 5.5.1`.
static HYPHEN_RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+){0,2})\s+-\s+(\d+(?:\.\d+){0,2})\s*$")
        .expect("HYPHEN_RANGE_REGEX must compile")
});

/// A dependency or requirement declared in metadata.json.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRequirement {
    pub name: String,
    #[serde(default)]
    pub version_requirement: Option<String>,
}

/// The parts of metadata.json modkit cares about.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleMetadata {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    /// The modkit version that last converted or updated this module.
    #[serde(rename = "modkit-version", default)]
    pub modkit_version: Option<String>,

    #[serde(default)]
    pub requirements: Vec<MetadataRequirement>,
}

impl ModuleMetadata {
    /// Read and parse a metadata.json file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ModkitError::MetadataParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ModkitError::MetadataParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load the metadata of the module containing `start`, if any.
    pub fn discover(start: &Path) -> Result<Option<Self>> {
        match find_module_root(start) {
            Some(root) => Self::from_file(&root.join(METADATA_FILE)).map(Some),
            None => Ok(None),
        }
    }

    /// The recorded modkit version as a semantic version.
    ///
    /// Only the first whitespace-separated token is considered, so values
    /// like `1.5.0 (dev build)` are accepted. Short forms such as `1.5` are
    /// padded with zeros. A value that does not parse counts as absent.
    pub fn recorded_tool_version(&self) -> Option<Version> {
        let raw = self.modkit_version.as_deref()?;
        let token = raw.split_whitespace().next()?;
        if let Ok(version) = Version::parse(token) {
            return Some(version);
        }
        match PartialVersion::parse(token) {
            Ok(partial) => Some(partial.version),
            Err(e) => {
                tracing::debug!("Ignoring unparsable modkit-version '{}': {}", raw, e);
                None
            }
        }
    }

    /// The engine version requirement, if the module declares one.
    pub fn engine_requirement(&self) -> Result<Option<VersionReq>> {
        let Some(raw) = self
            .requirements
            .iter()
            .find(|r| r.name == ENGINE_REQUIREMENT)
            .and_then(|r| r.version_requirement.as_deref())
        else {
            return Ok(None);
        };

        let normalized = normalize_requirement(raw)?;
        VersionReq::parse(&normalized).map(Some).map_err(|e| {
            ModkitError::UnmappableVersion(format!(
                "Invalid engine version requirement '{}' in {}: {}",
                raw, METADATA_FILE, e
            ))
        })
    }
}

/// Convert a space-separated requirement (`>= 4.7.0 < 6.0.0`) into the
/// comma-separated form semver understands (`>=4.7.0, <6.0.0`).
///
/// `~>` is treated as `~`, a bare version is an exact pin, and `A - B` is
/// an inclusive range. Any text that is not a comparator is rejected.
///
/// ```
/// use modkit::module::metadata::normalize_requirement;
///
/// assert_eq!(normalize_requirement(">= 4.7.0 < 6.0.0").unwrap(), ">=4.7.0, <6.0.0");
/// assert_eq!(normalize_requirement("~> 5.3").unwrap(), "~5.3");
/// assert_eq!(normalize_requirement("5.3.0").unwrap(), "=5.3.0");
/// assert!(normalize_requirement("!= 6.4.2").is_err());
/// ```
pub fn normalize_requirement(raw: &str) -> Result<String> {
    let invalid = |reason: String| {
        ModkitError::UnmappableVersion(format!(
            "Invalid engine version requirement '{}' in {}: {}",
            raw, METADATA_FILE, reason
        ))
    };

    if let Some(caps) = HYPHEN_RANGE_REGEX.captures(raw) {
        return Ok(format!(">={}, <={}", &caps[1], &caps[2]));
    }

    let mut comparators = Vec::new();
    let mut rest = raw.trim();
    while !rest.is_empty() {
        if !comparators.is_empty() {
            rest = rest.strip_prefix(',').unwrap_or(rest).trim_start();
        }
        let caps = COMPARATOR_REGEX
            .captures(rest)
            .ok_or_else(|| invalid(format!("unexpected '{}'", rest)))?;

        let version = &caps[2];
        let op = match caps.get(1).map(|m| m.as_str()) {
            Some("~>") => "~",
            Some(op) => op,
            None if version.contains(['x', 'X', '*']) => "",
            None => "=",
        };
        comparators.push(format!("{}{}", op, version));

        let consumed = caps.get(0).map_or(rest.len(), |m| m.end());
        rest = rest[consumed..].trim_start();
    }

    if comparators.is_empty() {
        return Err(invalid("no version given".to_string()));
    }
    Ok(comparators.join(", "))
}

/// Find the module root by walking up from `start`.
///
/// Returns the first ancestor (including `start` itself) that contains a
/// metadata.json file. A relative `start` is resolved against the current
/// directory first.
pub fn find_module_root(start: &Path) -> Option<PathBuf> {
    let start = match std::path::absolute(start) {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!("Cannot resolve {}: {}", start.display(), e);
            return None;
        }
    };
    start
        .ancestors()
        .find(|dir| dir.join(METADATA_FILE).is_file())
        .map(Path::to_path_buf)
}
