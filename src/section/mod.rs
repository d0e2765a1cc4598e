// src/section/mod.rs

//! Recipe section model
//!
//! A recipe's ingredients and instructions are edited in one of two shapes:
//!
//! - **Simple**: one ingredient list and one block of instruction text
//! - **Sectioned**: an ordered list of named components (e.g. `Cake` and
//!   `Frosting`), each with its own ingredients and instructions
//!
//! Storage knows nothing about components. It holds two flat tables of rows,
//! each row tagged with a section label. This module converts between the
//! two representations:
//!
//! ```text
//! RecipeSectionModel --flatten--> RecipeRows --partition--> Partition
//!         ^                                                     |
//!         +--------------------reconstruct----------------------+
//! ```
//!
//! Reloading a recipe yields a simple model exactly when every row is
//! labeled `Main`; anything else comes back sectioned.

mod flatten;
mod label;
mod model;
mod partition;
mod reconstruct;
mod rows;

pub use flatten::{FlattenOptions, flatten};
pub use label::{MAIN_LABEL, SectionLabel};
pub use model::{
    Component, ComponentId, DiscardPolicy, IdGenerator, RecipeSectionModel, SequentialIds,
    UuidIds,
};
pub use partition::{Partition, SectionContent, partition};
pub use reconstruct::{reconstruct, reconstruct_rows};
pub use rows::{IngredientRow, InstructionRow, RecipeRows};

use crate::error::Result;

/// Supplies the stored rows of a recipe
pub trait RowSource {
    /// Fetch every ingredient and instruction row for `recipe_id`
    ///
    /// Row order is unspecified; callers run the rows through [`partition`].
    fn fetch_rows(&self, recipe_id: i64) -> Result<RecipeRows>;
}

/// Accepts a full replacement row set for a recipe
pub trait RowSink {
    /// Replace all ingredient and instruction rows of `recipe_id`
    ///
    /// Either every old row is replaced or nothing changes.
    fn replace_rows(&self, recipe_id: i64, rows: &RecipeRows) -> Result<()>;
}
