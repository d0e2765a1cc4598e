// src/error.rs

//! Error types for recipebox

use thiserror::Error;

/// User-correctable failures raised while saving a recipe
///
/// The display text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Recipe title is required")]
    MissingTitle,

    #[error("At least one instruction is required")]
    MissingInstructions,

    #[error("A sectioned recipe needs at least one component")]
    NoComponents,

    #[error("More than one component is named '{0}'")]
    DuplicateSection(String),

    #[error("Switching to a single section discards {components} component(s); confirm to continue")]
    DiscardRequiresConfirmation { components: usize },

    #[error("Recipe is not split into components")]
    NotSectioned,

    #[error("Cannot remove the last component of a sectioned recipe")]
    LastComponent,

    #[error("Unknown component: {0}")]
    UnknownComponent(String),
}

/// Library error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid row: {0}")]
    InvalidRow(String),
}

impl Error {
    /// Check if this error is something the user can fix by editing input
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Result type for recipebox operations
pub type Result<T> = std::result::Result<T, Error>;
