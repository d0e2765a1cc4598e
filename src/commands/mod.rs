// src/commands/mod.rs
//! Command handlers for the recipebox CLI

mod config;
mod recipe;

pub use config::{cmd_config_init, cmd_config_show};
pub use recipe::{
    cmd_create, cmd_delete, cmd_export, cmd_import, cmd_init, cmd_list, cmd_show,
    resolve_db_path,
};
