//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Both commands share the
//! version-resolution steps in [`preflight`].

pub mod check;
pub mod dispatcher;
pub mod env;
pub mod preflight;

pub use dispatcher::{working_dir, Command, CommandDispatcher, CommandResult};
