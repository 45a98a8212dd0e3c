//! Engine version catalog.
//!
//! A catalog knows which engine releases exist, which runtime each release
//! runs on, and which engine line each platform release bundles. The
//! environment resolver only talks to the [`VersionCatalog`] trait;
//! [`BuiltinCatalog`] is the YAML-backed implementation shipped with the
//! binary.

pub mod builtin;

pub use builtin::BuiltinCatalog;

use semver::{Version, VersionReq};
use serde::Serialize;
use thiserror::Error;

/// An engine release together with the runtime it requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolsetPair {
    pub runtime_version: Version,
    pub engine_version: Version,
}

/// Errors raised while mapping a version onto the catalog.
///
/// The display text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{0} is not a valid version number.")]
    InvalidVersion(String),

    #[error("Unable to find an engine release matching {0}.")]
    NoMatchingRelease(String),

    #[error("Unable to map platform version {0} to an engine version.")]
    UnmappedPlatform(String),

    #[error("Unable to find any engine release in the version catalog.")]
    Empty,
}

/// Lookup operations the environment resolver needs.
pub trait VersionCatalog {
    /// Map a (possibly partial) engine version string to a release.
    fn find_for_tool_version(&self, version: &str) -> Result<ToolsetPair, CatalogError>;

    /// Map a platform release version string to the engine it bundles.
    fn find_for_platform_version(&self, version: &str) -> Result<ToolsetPair, CatalogError>;

    /// The newest known release.
    fn latest_available(&self) -> Result<ToolsetPair, CatalogError>;

    /// The newest release satisfying a requirement.
    fn from_requirement(&self, requirement: &VersionReq) -> Result<ToolsetPair, CatalogError>;
}

/// A version written with one to three numeric components, e.g. `5`,
/// `5.3` or `5.3.2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialVersion {
    /// The version with missing components filled with zero.
    pub version: Version,
    /// How many components were written.
    pub segments: usize,
}

impl PartialVersion {
    /// Parse a partial version.
    ///
    /// ```
    /// use modkit::catalog::PartialVersion;
    ///
    /// let v = PartialVersion::parse("2017.3").unwrap();
    /// assert_eq!(v.version, semver::Version::new(2017, 3, 0));
    /// assert_eq!(v.segments, 2);
    /// ```
    pub fn parse(input: &str) -> Result<Self, CatalogError> {
        let invalid = || CatalogError::InvalidVersion(input.to_string());
        let trimmed = input.trim();

        let parts = trimmed
            .split('.')
            .map(|p| {
                if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                p.parse::<u64>().map_err(|_| invalid())
            })
            .collect::<Result<Vec<_>, _>>()?;

        if parts.is_empty() || parts.len() > 3 {
            return Err(invalid());
        }

        let part = |i: usize| parts.get(i).copied().unwrap_or(0);
        Ok(Self {
            version: Version::new(part(0), part(1), part(2)),
            segments: parts.len(),
        })
    }

    /// True when all three components were written.
    pub fn is_exact(&self) -> bool {
        self.segments == 3
    }

    /// The requirement matching the newest release at the written level of
    /// precision: `~M` for a bare major, `~M.m` otherwise.
    pub fn latest_requirement(&self) -> VersionReq {
        let text = if self.segments == 1 {
            format!("~{}", self.version.major)
        } else {
            format!("~{}.{}", self.version.major, self.version.minor)
        };
        // Built from plain integers, so this always parses.
        VersionReq::parse(&text).unwrap_or(VersionReq::STAR)
    }
}
