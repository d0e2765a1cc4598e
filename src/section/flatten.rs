// src/section/flatten.rs

//! Flatten a section model into persisted rows
//!
//! Simple recipes store every row under `Main` with no ingredient order.
//! Sectioned recipes store each component under its label, with ingredient
//! order restarting at 1 per component and step sequence numbers counting
//! across the whole recipe. Two components may not share a label, since
//! their rows could not be told apart on reload.

use super::label::SectionLabel;
use super::model::{Component, RecipeSectionModel, ingredient_lines, instruction_lines};
use super::rows::{IngredientRow, InstructionRow, RecipeRows};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Validation applied while flattening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlattenOptions {
    /// Reject recipes without a single instruction line
    pub require_instructions: bool,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            require_instructions: true,
        }
    }
}

/// Convert a section model into flat ingredient and instruction rows
pub fn flatten(
    model: &RecipeSectionModel,
    options: FlattenOptions,
) -> Result<RecipeRows, ValidationError> {
    let rows = match model {
        RecipeSectionModel::Simple {
            ingredients,
            instructions,
        } => flatten_simple(ingredients, instructions, options)?,
        RecipeSectionModel::Sectioned { components } => {
            if components.is_empty() {
                return Err(ValidationError::NoComponents);
            }
            check_unique_labels(components)?;
            if options.require_instructions && !components.iter().any(|c| c.has_instructions()) {
                return Err(ValidationError::MissingInstructions);
            }

            let mut rows = RecipeRows::default();
            let mut sequence = 0i64;
            for component in components {
                let label = component.label();
                for (idx, item) in component.filled_ingredients().enumerate() {
                    rows.ingredients
                        .push(IngredientRow::new(item, label.clone()).with_order(idx as i64 + 1));
                }
                for step in component.steps() {
                    sequence += 1;
                    rows.instructions
                        .push(InstructionRow::new(sequence, step, label.clone()));
                }
            }
            rows
        }
    };

    debug!(
        "Flattened recipe into {} ingredient rows and {} steps",
        rows.ingredients.len(),
        rows.instructions.len()
    );
    Ok(rows)
}

fn check_unique_labels(components: &[Component]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for component in components {
        let label = component.label();
        if !seen.insert(label.as_str().to_string()) {
            return Err(ValidationError::DuplicateSection(label.into_string()));
        }
    }
    Ok(())
}

fn flatten_simple(
    ingredients: &[String],
    instructions: &str,
    options: FlattenOptions,
) -> Result<RecipeRows, ValidationError> {
    if options.require_instructions && instructions.trim().is_empty() {
        return Err(ValidationError::MissingInstructions);
    }

    let ingredients = ingredient_lines(ingredients)
        .map(|item| IngredientRow::new(item, SectionLabel::main()))
        .collect();
    let instructions = instruction_lines(instructions)
        .enumerate()
        .map(|(idx, step)| InstructionRow::new(idx as i64 + 1, step, SectionLabel::main()))
        .collect();

    Ok(RecipeRows::new(ingredients, instructions))
}
