//! Preflight steps shared by commands.

use std::path::PathBuf;

use crate::catalog::BuiltinCatalog;
use crate::cli::args::PreflightArgs;
use crate::environment::vars::CATALOG_VAR;
use crate::environment::{
    EnvLookup, ResolvedEnvironment, VersionDirectives, VersionOptionValidator,
    VersionSourceResolver,
};
use crate::error::Result;
use crate::module::ModuleMetadata;
use crate::ui::UserInterface;

/// The catalog file to load, if any: `--catalog` beats `MODKIT_CATALOG`.
pub fn catalog_path(args: &PreflightArgs, env: &dyn EnvLookup) -> Option<PathBuf> {
    args.catalog
        .clone()
        .or_else(|| env.get_non_empty(CATALOG_VAR).map(PathBuf::from))
}

/// Validate version directives and resolve the target environment.
pub fn resolve_environment(
    args: &PreflightArgs,
    env: &dyn EnvLookup,
    metadata: Option<&ModuleMetadata>,
    ui: &mut dyn UserInterface,
) -> Result<ResolvedEnvironment> {
    let directives = VersionDirectives::collect(
        args.tool_version.as_deref(),
        args.platform_version.as_deref(),
        env,
    );
    VersionOptionValidator::validate(&directives, ui)?;

    let catalog = BuiltinCatalog::load(catalog_path(args, env).as_deref())?;
    VersionSourceResolver::new(&catalog).resolve(&directives, metadata, ui)
}
