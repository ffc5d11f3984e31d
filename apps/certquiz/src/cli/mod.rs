//! # certquiz CLI Module
//!
//! This module implements the CLI interface for certquiz.
//!
//! ## Available Commands
//!
//! - `play` - Interactive terminal session (default)
//! - `validate` - Load and validate a catalog
//! - `rank` - Show the rank for a percentage
//! - `serve` - Start the HTTP server

mod commands;
mod play;

use crate::config::{FileConfig, Settings};
use certquiz_core::QuizError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;
pub use play::{SessionEnd, TerminalSession};

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// certquiz - gated certification quiz
///
/// Stages of multiple-choice questions, each unlocked by passing the one
/// before it, ending in a qualification rank.
#[derive(Parser, Debug)]
#[command(name = "certquiz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file (default: ./certquiz.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the catalog JSON
    #[arg(short = 'C', long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Play the quiz in the terminal
    Play,

    /// Load and validate the catalog, then print a summary
    Validate,

    /// Show the rank awarded for an aggregate percentage
    Rank {
        /// Aggregate percentage (0-100)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=100))]
        percentage: u32,
    },

    /// Start HTTP server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), QuizError> {
    let file = FileConfig::load(cli.config.as_deref())?;
    let json_mode = cli.json_mode;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let settings = Settings::resolve(&file, cli.catalog, None, None);
            cmd_play(&settings.catalog)
        }
        Commands::Validate => {
            let settings = Settings::resolve(&file, cli.catalog, None, None);
            cmd_validate(&settings.catalog, json_mode)
        }
        Commands::Rank { percentage } => {
            let settings = Settings::resolve(&file, cli.catalog, None, None);
            cmd_rank(&settings.catalog, percentage, json_mode)
        }
        Commands::Serve { host, port } => {
            let settings = Settings::resolve(&file, cli.catalog, host, port);
            cmd_serve(&settings).await
        }
    }
}
