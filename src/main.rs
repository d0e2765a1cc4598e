// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, ConfigCommands};
use recipebox::Config;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref().map(Path::new))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .init();

    let db = |db_path: Option<String>| commands::resolve_db_path(db_path.as_deref(), &config);

    match cli.command {
        Some(Commands::Init { db_path }) => commands::cmd_init(&db(db_path)),
        Some(Commands::Create {
            title,
            description,
            visibility,
            from,
            db_path,
        }) => commands::cmd_create(
            &title,
            description.as_deref(),
            &visibility,
            from.as_deref(),
            &db(db_path),
            &config,
        ),
        Some(Commands::List {
            visibility,
            db_path,
        }) => commands::cmd_list(visibility.as_deref(), &db(db_path)),
        Some(Commands::Show { id, db_path }) => commands::cmd_show(id, &db(db_path), &config),
        Some(Commands::Import { id, file, db_path }) => {
            commands::cmd_import(id, &file, &db(db_path), &config)
        }
        Some(Commands::Export { id, db_path }) => commands::cmd_export(id, &db(db_path), &config),
        Some(Commands::Delete { id, db_path }) => commands::cmd_delete(id, &db(db_path)),
        Some(Commands::Config(ConfigCommands::Show)) => commands::cmd_config_show(&config),
        Some(Commands::Config(ConfigCommands::Init { path, force })) => {
            commands::cmd_config_init(path.as_deref(), force)
        }
        None => {
            println!("recipebox {}", env!("CARGO_PKG_VERSION"));
            println!("Run 'recipebox --help' for usage information");
            Ok(())
        }
    }
}
