//! Command-line interface for modkit.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, EnvArgs, PreflightArgs};
pub use commands::{working_dir, Command, CommandDispatcher, CommandResult};
