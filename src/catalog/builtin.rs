//! YAML-backed version catalog.

use std::fs;
use std::path::Path;

use semver::{Version, VersionReq};
use serde::Deserialize;

use crate::error::{ModkitError, Result};

use super::{CatalogError, PartialVersion, ToolsetPair, VersionCatalog};

/// The catalog compiled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("catalog.yml");

#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    releases: Vec<ReleaseEntry>,
    #[serde(default)]
    platforms: Vec<PlatformEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct ReleaseEntry {
    engine: Version,
    runtime: Version,
}

#[derive(Debug, Clone, Deserialize)]
struct PlatformEntry {
    platform: VersionReq,
    engine: String,
}

/// Version catalog loaded from YAML.
///
/// # Example
///
/// ```
/// use modkit::catalog::{BuiltinCatalog, VersionCatalog};
///
/// let catalog = BuiltinCatalog::embedded().unwrap();
/// let pair = catalog.find_for_tool_version("5.3").unwrap();
/// assert_eq!(pair.engine_version.to_string(), "5.3.6");
/// ```
#[derive(Debug, Clone)]
pub struct BuiltinCatalog {
    /// Newest first.
    releases: Vec<ReleaseEntry>,
    platforms: Vec<PlatformEntry>,
}

impl BuiltinCatalog {
    /// The catalog shipped with modkit.
    pub fn embedded() -> Result<Self> {
        Self::from_yaml_str(EMBEDDED_CATALOG).map_err(|e| ModkitError::CatalogLoad {
            path: "<embedded>".into(),
            message: e.to_string(),
        })
    }

    /// Load a catalog file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ModkitError::CatalogLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&content).map_err(|e| ModkitError::CatalogLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from an explicit file if given, the embedded catalog otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!("Loading version catalog from {}", path.display());
                Self::from_file(path)
            }
            None => Self::embedded(),
        }
    }

    /// Parse catalog YAML.
    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        let file: CatalogFile = serde_yaml::from_str(content)?;
        let mut releases = file.releases;
        releases.sort_by(|a, b| b.engine.cmp(&a.engine));
        Ok(Self {
            releases,
            platforms: file.platforms,
        })
    }

    fn newest_matching(&self, requirement: &VersionReq) -> Option<&ReleaseEntry> {
        self.releases
            .iter()
            .find(|r| requirement.matches(&r.engine))
    }
}

impl ReleaseEntry {
    fn pair(&self) -> ToolsetPair {
        ToolsetPair {
            runtime_version: self.runtime.clone(),
            engine_version: self.engine.clone(),
        }
    }
}

impl VersionCatalog for BuiltinCatalog {
    fn find_for_tool_version(
        &self,
        version: &str,
    ) -> std::result::Result<ToolsetPair, CatalogError> {
        let requested = PartialVersion::parse(version)?;

        if requested.is_exact() {
            let exact = self.releases.iter().find(|r| r.engine == requested.version);
            if let Some(release) = exact {
                return Ok(release.pair());
            }
        }

        let requirement = requested.latest_requirement();
        let release = self
            .newest_matching(&requirement)
            .ok_or_else(|| CatalogError::NoMatchingRelease(requirement.to_string()))?;

        if requested.is_exact() {
            tracing::warn!(
                "Engine {} is not available, activating {} instead.",
                requested.version,
                release.engine
            );
        }

        Ok(release.pair())
    }

    fn find_for_platform_version(
        &self,
        version: &str,
    ) -> std::result::Result<ToolsetPair, CatalogError> {
        let requested = PartialVersion::parse(version)?;

        let entry = self
            .platforms
            .iter()
            .find(|p| p.platform.matches(&requested.version))
            .ok_or_else(|| CatalogError::UnmappedPlatform(version.to_string()))?;

        tracing::debug!(
            "Platform {} bundles engine {}",
            requested.version,
            entry.engine
        );
        self.find_for_tool_version(&entry.engine)
    }

    fn latest_available(&self) -> std::result::Result<ToolsetPair, CatalogError> {
        self.releases
            .first()
            .map(ReleaseEntry::pair)
            .ok_or(CatalogError::Empty)
    }

    fn from_requirement(
        &self,
        requirement: &VersionReq,
    ) -> std::result::Result<ToolsetPair, CatalogError> {
        self.newest_matching(requirement)
            .map(ReleaseEntry::pair)
            .ok_or_else(|| CatalogError::NoMatchingRelease(requirement.to_string()))
    }
}
