// src/lib.rs

//! recipebox - recipes with optional multi-part components
//!
//! A recipe is either one ingredient list plus instructions, or an ordered
//! set of named components (a cake plus its frosting), each with its own
//! ingredients and instructions.
//!
//! # Architecture
//!
//! - Storage is flat: one ingredient table and one step table, every row
//!   tagged with a section label (`Main` by default)
//! - Editing is structured: [`RecipeSectionModel`] is either simple or
//!   sectioned, and converts losslessly to and from the flat rows
//! - Saving is atomic: the recipe header and all of its rows are replaced
//!   in a single SQLite transaction

pub mod config;
pub mod db;
mod error;
pub mod recipe;
pub mod section;

pub use config::{Config, EditorConfig};
pub use db::models::{Recipe, Visibility};
pub use error::{Error, Result, ValidationError};
pub use recipe::{RecipeEditor, load_sections, save_sections};
pub use section::{
    Component, ComponentId, DiscardPolicy, FlattenOptions, IdGenerator, IngredientRow,
    InstructionRow, MAIN_LABEL, Partition, RecipeRows, RecipeSectionModel, RowSink, RowSource,
    SectionLabel, SequentialIds, UuidIds, flatten, partition, reconstruct, reconstruct_rows,
};
