// src/db/models/mod.rs

//! Data models for recipebox database entities
//!
//! Each struct corresponds to a table and provides methods for creating,
//! reading and deleting its records.

mod ingredient;
mod recipe;
mod step;

pub use ingredient::IngredientEntry;
pub use recipe::{Recipe, Visibility};
pub use step::StepEntry;
