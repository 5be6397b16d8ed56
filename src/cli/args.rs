//! CLI argument parsing using clap

use crate::config::Override;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for preflight commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// Preflight CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "appd-preflight")]
#[command(about = "Validate AppDynamics controller and agent settings before deployment")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring (overrides preflight.toml)
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available preflight subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one or more profiles
    Check {
        /// Profile files (TOML, or JSON with a .json extension)
        profiles: Vec<PathBuf>,

        /// Set a field value, applied on top of every profile
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        overrides: Vec<Override>,

        /// Output format (overrides preflight.toml)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Path to preflight.toml
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the validation rules
    List {
        /// Output format (overrides preflight.toml)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Path to preflight.toml
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create preflight.toml and a profile template in this directory
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

impl Command {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Command::Check { .. } => "check",
            Command::List { .. } => "list",
            Command::Init { .. } => "init",
        }
    }
}
