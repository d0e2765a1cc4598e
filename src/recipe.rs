// src/recipe.rs

//! Recipe edit sessions
//!
//! A [`RecipeEditor`] lives for one edit of one recipe:
//!
//! 1. Load the header and rows, then rebuild the section model
//!    (or start from an empty model for a new recipe)
//! 2. Apply user edits in memory
//! 3. Validate, flatten and write the header and rows in one transaction
//!
//! Nothing is written until [`RecipeEditor::save`] succeeds.

use crate::config::EditorConfig;
use crate::db;
use crate::db::models::{Recipe, Visibility};
use crate::error::{Error, Result, ValidationError};
use crate::section::{
    Component, ComponentId, FlattenOptions, IdGenerator, RecipeRows, RecipeSectionModel,
    RowSink, RowSource, UuidIds, flatten, reconstruct_rows,
};
use rusqlite::Connection;
use tracing::{debug, info, warn};

/// Fetch a recipe's rows and rebuild its section model
pub fn load_sections(
    source: &impl RowSource,
    recipe_id: i64,
    ids: &mut impl IdGenerator,
) -> Result<RecipeSectionModel> {
    let rows = source.fetch_rows(recipe_id)?;
    Ok(reconstruct_rows(&rows, ids))
}

/// Flatten a section model and replace a recipe's rows with the result
///
/// Validation failures are returned before anything is written.
/// Stored `quantity`, `unit` and `note` values are replaced with `NULL`.
pub fn save_sections(
    sink: &impl RowSink,
    recipe_id: i64,
    model: &RecipeSectionModel,
    options: FlattenOptions,
) -> Result<RecipeRows> {
    let rows = flatten(model, options)?;
    sink.replace_rows(recipe_id, &rows)?;
    Ok(rows)
}

/// In-memory state of one recipe being created or edited
#[derive(Debug)]
pub struct RecipeEditor<G: IdGenerator = UuidIds> {
    recipe: Recipe,
    sections: RecipeSectionModel,
    ids: G,
    config: EditorConfig,
}

impl RecipeEditor<UuidIds> {
    /// Start editing a new, unsaved recipe
    pub fn create(title: impl Into<String>, config: EditorConfig) -> Self {
        Self::create_with_ids(title, config, UuidIds)
    }

    /// Load an existing recipe for editing
    pub fn load(conn: &Connection, recipe_id: i64, config: EditorConfig) -> Result<Self> {
        Self::load_with_ids(conn, recipe_id, config, UuidIds)
    }
}

impl<G: IdGenerator> RecipeEditor<G> {
    pub fn create_with_ids(title: impl Into<String>, config: EditorConfig, ids: G) -> Self {
        Self {
            recipe: Recipe::new(title.into()),
            sections: RecipeSectionModel::empty(),
            ids,
            config,
        }
    }

    pub fn load_with_ids(
        conn: &Connection,
        recipe_id: i64,
        config: EditorConfig,
        mut ids: G,
    ) -> Result<Self> {
        let recipe = Recipe::find_by_id(conn, recipe_id)?
            .ok_or_else(|| Error::NotFound(format!("Recipe {}", recipe_id)))?;
        let sections = load_sections(conn, recipe_id, &mut ids)?;
        debug!(
            "Loaded recipe {} ({} mode)",
            recipe_id,
            if sections.is_sectioned() { "sectioned" } else { "simple" }
        );

        Ok(Self {
            recipe,
            sections,
            ids,
            config,
        })
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn sections(&self) -> &RecipeSectionModel {
        &self.sections
    }

    /// Direct access to the section model for field edits
    pub fn sections_mut(&mut self) -> &mut RecipeSectionModel {
        &mut self.sections
    }

    /// Replace the whole section model (e.g. from an import)
    pub fn set_sections(&mut self, sections: RecipeSectionModel) {
        self.sections = sections;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.recipe.title = title.into();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.recipe.description = description;
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.recipe.visibility = visibility;
    }

    pub fn switch_to_sectioned(&mut self) {
        self.sections.switch_to_sectioned(&mut self.ids);
    }

    /// Leave sectioned mode, discarding all components
    ///
    /// Pass `confirmed = true` once the user has agreed to lose component
    /// content. Returns the discarded components.
    pub fn switch_to_simple(&mut self, confirmed: bool) -> Result<Vec<Component>> {
        let policy = self.config.discard_policy(confirmed);
        let discarded = self.sections.switch_to_simple(policy)?;
        if !discarded.is_empty() {
            warn!("Discarded {} components", discarded.len());
        }
        Ok(discarded)
    }

    pub fn add_component(&mut self) -> Result<ComponentId> {
        Ok(self.sections.add_component(&mut self.ids)?)
    }

    pub fn remove_component(&mut self, id: &ComponentId) -> Result<Component> {
        Ok(self.sections.remove_component(id)?)
    }

    /// Check everything the user must fix before saving
    pub fn validate(&self) -> std::result::Result<RecipeRows, ValidationError> {
        self.recipe.validate()?;
        flatten(&self.sections, self.config.flatten_options())
    }

    /// Write the header and rows, returning the recipe id
    ///
    /// Header and rows are written in one transaction: on failure nothing
    /// changes, including for a recipe that has never been saved.
    ///
    /// Ingredients are edited as text lines, so any `quantity`, `unit` or
    /// `note` stored on the replaced rows is not written back.
    pub fn save(&mut self, conn: &mut Connection) -> Result<i64> {
        let rows = match self.validate() {
            Ok(rows) => rows,
            Err(e) => {
                debug!("Recipe failed validation: {}", e);
                return Err(e.into());
            }
        };

        let mut recipe = self.recipe.clone();
        let id = db::transaction(conn, |tx| {
            let id = match recipe.id {
                Some(id) => {
                    recipe.update(tx)?;
                    id
                }
                None => recipe.insert(tx)?,
            };
            db::write_rows(tx, id, &rows)?;
            Ok(id)
        })?;
        self.recipe = recipe;

        info!(
            "Saved recipe {} '{}' ({} ingredients, {} steps)",
            id,
            self.recipe.title,
            rows.ingredients.len(),
            rows.instructions.len()
        );
        Ok(id)
    }
}
