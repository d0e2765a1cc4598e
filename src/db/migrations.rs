// src/db/migrations.rs
//! Database migration implementations
//!
//! Each function upgrades the schema by exactly one version.

use crate::error::Result;
use rusqlite::Connection;
use tracing::{debug, info};

/// Initial schema - Version 1
///
/// - recipes: recipe headers (title, description, visibility)
/// - recipe_ingredients: ingredient rows tagged with a section label
/// - recipe_steps: instruction rows with a recipe-wide sequence number
pub fn migrate_v1(conn: &Connection) -> Result<()> {
    debug!("Creating schema version 1");

    conn.execute_batch(
        "
        CREATE TABLE recipes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            visibility TEXT NOT NULL DEFAULT 'private'
                CHECK(visibility IN ('private', 'friends', 'public')),
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX idx_recipes_visibility ON recipes(visibility);

        -- Ingredients: section_label NULL means the default 'Main' section
        CREATE TABLE recipe_ingredients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            recipe_id INTEGER NOT NULL,
            item_name TEXT NOT NULL,
            quantity REAL,
            unit TEXT,
            note TEXT,
            section_label TEXT DEFAULT 'Main',
            sort_order INTEGER,
            FOREIGN KEY (recipe_id) REFERENCES recipes(id) ON DELETE CASCADE
        );

        CREATE INDEX idx_recipe_ingredients_recipe_id ON recipe_ingredients(recipe_id);

        -- Steps: sequence_number counts across all sections of a recipe
        CREATE TABLE recipe_steps (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            recipe_id INTEGER NOT NULL,
            sequence_number INTEGER NOT NULL,
            body TEXT NOT NULL,
            section_label TEXT DEFAULT 'Main',
            UNIQUE(recipe_id, sequence_number),
            FOREIGN KEY (recipe_id) REFERENCES recipes(id) ON DELETE CASCADE
        );

        CREATE INDEX idx_recipe_steps_recipe_id ON recipe_steps(recipe_id);
        ",
    )?;

    info!("Schema version 1 created successfully");
    Ok(())
}
