//! Target environment resolution.
//!
//! Resolves the runtime and engine versions a command should run against,
//! using the first source that is present:
//! 1. `--tool-version` / `--platform-version` option
//! 2. `MODKIT_TOOL_VERSION` / `MODKIT_PLATFORM_VERSION` variable
//! 3. The engine requirement in the module's metadata.json
//! 4. The latest release in the version catalog
//!
//! Directives must already have passed
//! [`VersionOptionValidator`](super::VersionOptionValidator), so at most one
//! kind is present.

use std::collections::BTreeMap;
use std::fmt;

use semver::Version;
use serde::Serialize;

use crate::catalog::{CatalogError, ToolsetPair, VersionCatalog};
use crate::error::{ModkitError, Result};
use crate::module::ModuleMetadata;
use crate::ui::UserInterface;

use super::directive::{DirectiveOrigin, VersionDirectives, VersionKind};

/// Toolset entry name for the engine package.
pub const ENGINE_PACKAGE: &str = "engine";

/// How the environment was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionSource {
    /// A CLI option or environment variable.
    Directive {
        kind: VersionKind,
        origin: DirectiveOrigin,
    },
    /// The module's engine requirement.
    ModuleMetadata,
    /// The newest release in the catalog.
    LatestAvailable,
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directive {
                kind,
                origin: DirectiveOrigin::Option,
            } => write!(f, "{} option", kind.option_name()),
            Self::Directive {
                kind,
                origin: DirectiveOrigin::Environment,
            } => write!(f, "{} environment variable", kind.env_var()),
            Self::ModuleMetadata => write!(f, "module metadata"),
            Self::LatestAvailable => write!(f, "latest available"),
        }
    }
}

/// The runtime and toolset a command should use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEnvironment {
    /// The language runtime version.
    pub runtime_version: Version,
    /// Package name to version, currently just the engine.
    pub toolset: BTreeMap<String, Version>,
    /// How this environment was determined.
    #[serde(skip)]
    pub source: ResolutionSource,
}

impl ResolvedEnvironment {
    fn from_pair(pair: ToolsetPair, source: ResolutionSource) -> Self {
        let mut toolset = BTreeMap::new();
        toolset.insert(ENGINE_PACKAGE.to_string(), pair.engine_version);
        Self {
            runtime_version: pair.runtime_version,
            toolset,
            source,
        }
    }

    /// The resolved engine version.
    pub fn engine_version(&self) -> Option<&Version> {
        self.toolset.get(ENGINE_PACKAGE)
    }
}

/// Resolves a [`ResolvedEnvironment`] from directives, metadata and a catalog.
pub struct VersionSourceResolver<'a> {
    catalog: &'a dyn VersionCatalog,
}

impl<'a> VersionSourceResolver<'a> {
    pub fn new(catalog: &'a dyn VersionCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve the environment and report it to the user.
    ///
    /// Emits `Using runtime X` and `Using <Package> Y` messages. A version
    /// the catalog cannot map fails with its message unchanged.
    pub fn resolve(
        &self,
        directives: &VersionDirectives,
        metadata: Option<&ModuleMetadata>,
        ui: &mut dyn UserInterface,
    ) -> Result<ResolvedEnvironment> {
        let resolved = self.select(directives, metadata)?;

        tracing::debug!("Resolved environment from {}", resolved.source);
        ui.message(&format!("Using runtime {}", resolved.runtime_version));
        for (name, version) in &resolved.toolset {
            ui.message(&format!("Using {} {}", capitalize(name), version));
        }

        Ok(resolved)
    }

    fn select(
        &self,
        directives: &VersionDirectives,
        metadata: Option<&ModuleMetadata>,
    ) -> Result<ResolvedEnvironment> {
        for kind in VersionKind::ALL {
            if let Some(directive) = directives.effective(kind) {
                let pair = match kind {
                    VersionKind::Tool => self.catalog.find_for_tool_version(&directive.value),
                    VersionKind::Platform => {
                        self.catalog.find_for_platform_version(&directive.value)
                    }
                }
                .map_err(unmappable)?;

                return Ok(ResolvedEnvironment::from_pair(
                    pair,
                    ResolutionSource::Directive {
                        kind,
                        origin: directive.origin,
                    },
                ));
            }
        }

        let requirement = match metadata {
            Some(metadata) => metadata.engine_requirement()?,
            None => None,
        };

        if let Some(requirement) = requirement {
            tracing::debug!("Module requires engine {}", requirement);
            let pair = self
                .catalog
                .from_requirement(&requirement)
                .map_err(unmappable)?;
            return Ok(ResolvedEnvironment::from_pair(
                pair,
                ResolutionSource::ModuleMetadata,
            ));
        }

        let pair = self.catalog.latest_available().map_err(unmappable)?;
        Ok(ResolvedEnvironment::from_pair(
            pair,
            ResolutionSource::LatestAvailable,
        ))
    }
}

fn unmappable(err: CatalogError) -> ModkitError {
    ModkitError::UnmappableVersion(err.to_string())
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
