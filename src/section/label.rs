// src/section/label.rs

//! Section labels
//!
//! Every persisted ingredient and instruction row carries a section label
//! naming the component it belongs to (e.g. `Cake`, `Frosting`). A recipe
//! without explicit components stores all of its rows under the default
//! label `Main`.
//!
//! Labels are compared by exact string equality. Trimming only happens when
//! a label is derived from a user-entered component title.

use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Label used for the single implicit section of a simple recipe
pub const MAIN_LABEL: &str = "Main";

/// The section label attached to persisted rows
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionLabel(String);

impl SectionLabel {
    /// The default `Main` label
    pub fn main() -> Self {
        Self(MAIN_LABEL.to_string())
    }

    /// Label for a component title
    ///
    /// The title is trimmed; a blank title maps to `Main`.
    pub fn from_title(title: &str) -> Self {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            Self::main()
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Label as read from storage
    ///
    /// Absent labels default to `Main`. Present labels are kept verbatim.
    pub fn from_stored(label: Option<&str>) -> Self {
        match label {
            Some(s) => Self(s.to_string()),
            None => Self::main(),
        }
    }

    /// Check if this is the default `Main` label
    pub fn is_main(&self) -> bool {
        self.0 == MAIN_LABEL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Deserialize a label that may be `null` or missing, defaulting to `Main`
pub(crate) fn deserialize_nullable<'de, D>(deserializer: D) -> Result<SectionLabel, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(SectionLabel::from_stored(label.as_deref()))
}

impl Default for SectionLabel {
    fn default() -> Self {
        Self::main()
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SectionLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SectionLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionLabel {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SectionLabel {
    fn from(s: String) -> Self {
        Self(s)
    }
}
