//! CLI - command-line argument parsing.
//!
//! Defines the CLI structure using clap. Keeps argument parsing separate
//! from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vox control CLI
#[derive(Parser)]
#[command(name = "voxctl")]
#[command(about = "Vox - natural language command interpreter", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Path to a TOML command catalog (defaults to the built-in catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Subcommand (if not provided, starts the interactive REPL)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Interpret one utterance and print the decided directive
    Interpret {
        /// The utterance (remaining words are joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// List the command catalog
    Commands {
        /// Render the catalog as TOML (reusable with --catalog)
        #[arg(long)]
        toml: bool,
    },

    /// Start the interactive REPL
    Repl,
}
