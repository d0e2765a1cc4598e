// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: database path
fn db_path_arg() -> Arg {
    Arg::new("db_path")
        .short('d')
        .long("db-path")
        .value_name("PATH")
        .help("Path to the database file (overrides the config file)")
}

/// Common argument: recipe id
fn id_arg() -> Arg {
    Arg::new("id").required(true).help("Recipe ID")
}

fn build_cli() -> Command {
    Command::new("recipebox")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Recipebox Contributors")
        .about("Store and edit recipes with multi-part components")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to the config file"),
        )
        .subcommand(
            Command::new("init")
                .about("Create or upgrade the database")
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("create")
                .about("Create a new recipe")
                .arg(
                    Arg::new("title")
                        .short('t')
                        .long("title")
                        .required(true)
                        .help("Recipe title"),
                )
                .arg(Arg::new("description").long("description").help("Short description"))
                .arg(
                    Arg::new("visibility")
                        .long("visibility")
                        .default_value("private")
                        .help("Who can see the recipe: private, friends or public"),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("JSON file with the recipe's ingredients and instructions"),
                )
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("list")
                .about("List recipes")
                .arg(
                    Arg::new("visibility")
                        .long("visibility")
                        .help("Only show recipes with this visibility"),
                )
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show a recipe with its sections")
                .arg(id_arg())
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("import")
                .about("Replace a recipe's ingredients and instructions from a JSON file")
                .arg(id_arg())
                .arg(
                    Arg::new("file")
                        .required(true)
                        .help("JSON file holding a simple or sectioned recipe model"),
                )
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Print a recipe's ingredients and instructions as JSON")
                .arg(id_arg())
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a recipe and all of its rows")
                .arg(id_arg())
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("config")
                .about("Configuration file management")
                .subcommand(Command::new("show").about("Print the effective configuration"))
                .subcommand(
                    Command::new("init")
                        .about("Write a config file with default settings")
                        .arg(Arg::new("path").long("path").help("Where to write the file"))
                        .arg(
                            Arg::new("force")
                                .short('f')
                                .long("force")
                                .action(clap::ArgAction::SetTrue)
                                .help("Overwrite an existing file"),
                        ),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("recipebox.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
