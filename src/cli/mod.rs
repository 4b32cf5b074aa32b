//! CLI command definitions for denim.
//!
//! This module defines the CLI structure using clap's derive macros. The
//! main entry point is the `Cli` struct which contains subcommands.

pub mod export;

use clap::{Parser, Subcommand};
use export::ExportArgs;

/// Meeting room directory and dialer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a room by name and print its meeting URL
    Find {
        /// Room name (case-insensitive)
        name: String,
    },

    /// List all rooms in the directory
    List,

    /// Export rooms as vCard contact records
    Export(ExportArgs),
}
