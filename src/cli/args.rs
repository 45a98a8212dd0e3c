//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// modkit - Development kit for modules.
#[derive(Debug, Parser)]
#[command(name = "modkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub preflight: PreflightArgs,

    /// Path to run in (overrides current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Version selection options shared by every command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PreflightArgs {
    /// Engine version to run against (e.g. 5, 5.3 or 5.3.2)
    #[arg(long, global = true, value_name = "VERSION")]
    pub tool_version: Option<String>,

    /// Platform release whose bundled engine to run against (e.g. 2017.3)
    #[arg(long, global = true, value_name = "VERSION")]
    pub platform_version: Option<String>,

    /// Version catalog file (overrides MODKIT_CATALOG and the built-in catalog)
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the runtime and engine versions commands will use
    Env(EnvArgs),

    /// Run preflight checks against the current module (default)
    Check(CheckArgs),
}

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnvArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Accept a directory without metadata.json if it has a module layout
    #[arg(long)]
    pub check_module_layout: bool,
}
