// src/section/reconstruct.rs

//! Rebuild a section model from partitioned rows
//!
//! A recipe whose rows all sit under `Main` comes back as a simple model.
//! Any other label set, including a single non-`Main` label, comes back as a
//! sectioned model with one component per label in section order.

use super::model::{Component, IdGenerator, RecipeSectionModel};
use super::partition::{Partition, partition};
use super::rows::RecipeRows;
use tracing::debug;

/// Build the editable model from partitioned rows
pub fn reconstruct(partition: Partition, ids: &mut impl IdGenerator) -> RecipeSectionModel {
    if partition.is_empty() {
        return RecipeSectionModel::empty();
    }

    if partition.is_main_only() {
        let mut sections = partition.into_sections();
        let (_, content) = sections.remove(0);
        debug!("Reconstructed simple recipe");
        return RecipeSectionModel::simple(
            with_placeholder(content.ingredients),
            content.instructions.join("\n"),
        );
    }

    let components: Vec<Component> = partition
        .into_sections()
        .into_iter()
        .map(|(label, content)| {
            Component::with_content(
                ids.next_id(),
                label.into_string(),
                with_placeholder(content.ingredients),
                content.instructions.join("\n"),
            )
        })
        .collect();

    debug!("Reconstructed sectioned recipe with {} components", components.len());
    RecipeSectionModel::sectioned(components)
}

/// Partition and reconstruct in one step
pub fn reconstruct_rows(rows: &RecipeRows, ids: &mut impl IdGenerator) -> RecipeSectionModel {
    reconstruct(partition(&rows.ingredients, &rows.instructions), ids)
}

// The editor always shows at least one ingredient input
fn with_placeholder(ingredients: Vec<String>) -> Vec<String> {
    if ingredients.is_empty() {
        vec![String::new()]
    } else {
        ingredients
    }
}
