//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::environment::{EnvLookup, InteractivityDetector};
use crate::error::Result;
use crate::ui::UserInterface;

use super::check::CheckCommand;
use super::env::EnvCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
///
/// Failures are reported as errors, so a completed command always exits 0.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use.
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// The directory commands run in: `directory` if given, the current
/// directory otherwise. The result is always absolute so that module
/// discovery can walk up from it.
pub fn working_dir(directory: Option<&Path>) -> Result<PathBuf> {
    let dir = match directory {
        Some(dir) => std::path::absolute(dir)?,
        None => std::env::current_dir()?,
    };
    Ok(dir)
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    cwd: PathBuf,
    env: &'a dyn EnvLookup,
    interactivity: InteractivityDetector,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a new dispatcher for the given working directory.
    pub fn new(cwd: PathBuf, env: &'a dyn EnvLookup, interactivity: InteractivityDetector) -> Self {
        Self {
            cwd,
            env,
            interactivity,
        }
    }

    /// Get the working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Dispatch and execute a command.
    ///
    /// Without a subcommand, runs `check` with default arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let preflight = cli.preflight.clone();
        match &cli.command {
            Some(Commands::Env(args)) => {
                let cmd = EnvCommand::new(&self.cwd, preflight, args.clone(), self.env);
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let cmd = CheckCommand::new(
                    &self.cwd,
                    preflight,
                    args.clone(),
                    self.env,
                    self.interactivity.clone(),
                );
                cmd.execute(ui)
            }
            None => {
                let cmd = CheckCommand::new(
                    &self.cwd,
                    preflight,
                    CheckArgs::default(),
                    self.env,
                    self.interactivity.clone(),
                );
                cmd.execute(ui)
            }
        }
    }
}
