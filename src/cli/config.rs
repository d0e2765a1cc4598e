// src/cli/config.rs
//! Configuration file commands

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write a config file with default settings
    Init {
        /// Where to write the file (default: platform config directory)
        #[arg(long)]
        path: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
