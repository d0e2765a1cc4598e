// src/db/store.rs

//! Row source and row sink backed by SQLite
//!
//! Rows are validated on the way out of storage so the section transforms
//! never see an empty ingredient name, an empty step or a step numbered
//! below 1. Replacement deletes and inserts inside one transaction.

use super::models::{IngredientEntry, Recipe, StepEntry};
use crate::error::{Error, Result};
use crate::section::{RecipeRows, RowSink, RowSource};
use rusqlite::Connection;
use tracing::{debug, info};

impl RowSource for Connection {
    fn fetch_rows(&self, recipe_id: i64) -> Result<RecipeRows> {
        let ingredients: Vec<_> = IngredientEntry::find_by_recipe(self, recipe_id)?
            .iter()
            .map(IngredientEntry::to_section_row)
            .collect();
        let instructions: Vec<_> = StepEntry::find_by_recipe(self, recipe_id)?
            .iter()
            .map(StepEntry::to_section_row)
            .collect();

        let rows = RecipeRows::new(ingredients, instructions);
        rows.validate()?;

        debug!(
            "Fetched {} ingredient rows and {} steps for recipe {}",
            rows.ingredients.len(),
            rows.instructions.len(),
            recipe_id
        );
        Ok(rows)
    }
}

impl RowSink for Connection {
    fn replace_rows(&self, recipe_id: i64, rows: &RecipeRows) -> Result<()> {
        let tx = self.unchecked_transaction()?;
        write_rows(&tx, recipe_id, rows)?;
        tx.commit()?;
        Ok(())
    }
}

/// Delete and re-insert a recipe's rows on `conn`
///
/// Runs no transaction of its own; callers wrap it in one.
pub(crate) fn write_rows(conn: &Connection, recipe_id: i64, rows: &RecipeRows) -> Result<()> {
    rows.validate()?;

    if Recipe::find_by_id(conn, recipe_id)?.is_none() {
        return Err(Error::NotFound(format!("Recipe {}", recipe_id)));
    }

    let removed_ingredients = IngredientEntry::delete_by_recipe(conn, recipe_id)?;
    let removed_steps = StepEntry::delete_by_recipe(conn, recipe_id)?;

    for row in &rows.ingredients {
        IngredientEntry::from_section_row(recipe_id, row).insert(conn)?;
    }
    for row in &rows.instructions {
        StepEntry::from_section_row(recipe_id, row).insert(conn)?;
    }
    Recipe::touch(conn, recipe_id)?;

    info!(
        "Replaced rows of recipe {}: {} -> {} ingredients, {} -> {} steps",
        recipe_id,
        removed_ingredients,
        rows.ingredients.len(),
        removed_steps,
        rows.instructions.len()
    );
    Ok(())
}
