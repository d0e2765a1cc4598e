// src/cli/mod.rs
//! CLI definitions for recipebox
//!
//! This module contains the command-line interface definitions using clap.
//! The command implementations live in the `commands` module.

use clap::{Parser, Subcommand};

mod config;

pub use config::ConfigCommands;

#[derive(Parser)]
#[command(name = "recipebox")]
#[command(author = "Recipebox Contributors")]
#[command(version)]
#[command(about = "Store and edit recipes with multi-part components", long_about = None)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create or upgrade the database
    Init {
        /// Path to the database file (overrides the config file)
        #[arg(short, long)]
        db_path: Option<String>,
    },

    /// Create a new recipe
    Create {
        /// Recipe title
        #[arg(short, long)]
        title: String,

        /// Short description
        #[arg(long)]
        description: Option<String>,

        /// Who can see the recipe: private, friends or public
        #[arg(long, default_value = "private")]
        visibility: String,

        /// JSON file with the recipe's ingredients and instructions
        #[arg(long)]
        from: Option<String>,

        /// Path to the database file (overrides the config file)
        #[arg(short, long)]
        db_path: Option<String>,
    },

    /// List recipes
    List {
        /// Only show recipes with this visibility
        #[arg(long)]
        visibility: Option<String>,

        /// Path to the database file (overrides the config file)
        #[arg(short, long)]
        db_path: Option<String>,
    },

    /// Show a recipe with its sections
    Show {
        /// Recipe ID
        id: i64,

        /// Path to the database file (overrides the config file)
        #[arg(short, long)]
        db_path: Option<String>,
    },

    /// Replace a recipe's ingredients and instructions from a JSON file
    Import {
        /// Recipe ID
        id: i64,

        /// JSON file holding a simple or sectioned recipe model
        file: String,

        /// Path to the database file (overrides the config file)
        #[arg(short, long)]
        db_path: Option<String>,
    },

    /// Print a recipe's ingredients and instructions as JSON
    Export {
        /// Recipe ID
        id: i64,

        /// Path to the database file (overrides the config file)
        #[arg(short, long)]
        db_path: Option<String>,
    },

    /// Delete a recipe and all of its rows
    Delete {
        /// Recipe ID
        id: i64,

        /// Path to the database file (overrides the config file)
        #[arg(short, long)]
        db_path: Option<String>,
    },

    /// Configuration file management
    #[command(subcommand)]
    Config(ConfigCommands),
}
