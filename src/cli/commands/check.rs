//! Check command implementation.
//!
//! The `modkit check` command runs every preflight step against the
//! current module and reports the outcome. It is also what runs when no
//! subcommand is given.

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, PreflightArgs};
use crate::environment::{EnvLookup, InteractivityDetector};
use crate::error::Result;
use crate::module::{tool_version, CompatibilityAdvisor, DirectoryLayoutChecker, ModuleMetadata};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::preflight::resolve_environment;

/// The check command implementation.
pub struct CheckCommand<'a> {
    cwd: PathBuf,
    preflight: PreflightArgs,
    args: CheckArgs,
    env: &'a dyn EnvLookup,
    interactivity: InteractivityDetector,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(
        cwd: &Path,
        preflight: PreflightArgs,
        args: CheckArgs,
        env: &'a dyn EnvLookup,
        interactivity: InteractivityDetector,
    ) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            preflight,
            args,
            env,
            interactivity,
        }
    }

    /// Get the working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("modkit preflight");

        DirectoryLayoutChecker::new(&self.cwd).ensure_in_module(self.args.check_module_layout)?;

        let metadata = ModuleMetadata::discover(&self.cwd)?;
        match &metadata {
            Some(metadata) => {
                let recorded = metadata.recorded_tool_version();
                CompatibilityAdvisor::check(&tool_version()?, recorded.as_ref(), ui);
            }
            None => {
                tracing::debug!("Accepted by module layout; skipping compatibility check");
            }
        }

        let resolved = resolve_environment(&self.preflight, self.env, metadata.as_ref(), ui)?;
        tracing::debug!("Environment source: {}", resolved.source);

        if self.interactivity.is_interactive() {
            ui.message("Session is interactive");
        } else {
            ui.message("Session is non-interactive");
            if let Some(reason) = self.interactivity.reason() {
                ui.show_hint(reason);
            }
        }

        ui.success("Preflight checks passed");
        Ok(CommandResult::success())
    }
}
