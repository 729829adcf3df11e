//! CLI command definitions using clap
//!
//! Defines the command structure for the `roadmap` CLI tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// roadmap-rs - Frontend Development Roadmap viewer
///
/// Run without arguments to browse the roadmap in the terminal UI.
#[derive(Parser, Debug)]
#[command(name = "roadmap", version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, env = "ROADMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the roadmap tabs
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one category's junior, mid and senior topics
    Show {
        /// Category key (see 'roadmap list')
        key: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the summary tree
    Tree,

    /// Manage configuration
    Config(ConfigArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key (tick-rate, indent-width, show-icons)
        key: String,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (tick-rate, indent-width, show-icons)
        key: String,
    },
    /// Print the configuration file path
    Path,
}
