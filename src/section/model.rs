// src/section/model.rs

//! In-memory recipe section model
//!
//! A recipe is edited either in simple mode (one implicit section holding
//! an ingredient list and instruction text) or in sectioned mode (an ordered
//! list of named components such as `Cake` and `Frosting`).
//!
//! Ingredient lists hold raw text lines and may contain blank placeholders
//! while editing. Instructions are newline-separated step text. Blank lines
//! are only dropped when the model is flattened for storage.

use super::label::SectionLabel;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identity of a component within an edit session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of fresh component identities
pub trait IdGenerator {
    fn next_id(&mut self) -> ComponentId;
}

/// Random v4 UUID identities
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> ComponentId {
        ComponentId(Uuid::new_v4().to_string())
    }
}

/// Deterministic identities (`c1`, `c2`, ...), mostly useful in tests
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ComponentId {
        self.next += 1;
        ComponentId(format!("c{}", self.next))
    }
}

fn fresh_id() -> ComponentId {
    UuidIds.next_id()
}

fn blank_ingredients() -> Vec<String> {
    vec![String::new()]
}

/// Iterate the non-blank lines of some instruction text, trimmed
pub(crate) fn instruction_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Iterate the non-blank ingredient lines, trimmed
pub(crate) fn ingredient_lines(lines: &[String]) -> impl Iterator<Item = &str> {
    lines.iter().map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// A named part of a recipe with its own ingredients and instructions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(default = "fresh_id")]
    pub id: ComponentId,
    /// Display label; blank means `Main`
    #[serde(default)]
    pub title: String,
    #[serde(default = "blank_ingredients")]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    /// Accordion state in the editor, never persisted
    #[serde(skip)]
    pub collapsed: bool,
}

impl Component {
    /// Create an empty component with one blank ingredient row
    pub fn new(id: ComponentId) -> Self {
        Self {
            id,
            title: String::new(),
            ingredients: blank_ingredients(),
            instructions: String::new(),
            collapsed: false,
        }
    }

    /// Create a component with the given content
    pub fn with_content(
        id: ComponentId,
        title: impl Into<String>,
        ingredients: Vec<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            ingredients,
            instructions: instructions.into(),
            collapsed: false,
        }
    }

    /// The section label this component is stored under
    pub fn label(&self) -> SectionLabel {
        SectionLabel::from_title(&self.title)
    }

    /// Non-blank instruction lines, trimmed
    pub fn steps(&self) -> impl Iterator<Item = &str> {
        instruction_lines(&self.instructions)
    }

    /// Non-blank ingredient lines, trimmed
    pub fn filled_ingredients(&self) -> impl Iterator<Item = &str> {
        ingredient_lines(&self.ingredients)
    }

    pub fn has_instructions(&self) -> bool {
        self.steps().next().is_some()
    }

    /// Check if the user has entered anything into this component
    pub fn has_content(&self) -> bool {
        !self.title.trim().is_empty()
            || self.filled_ingredients().next().is_some()
            || self.has_instructions()
    }
}

/// Whether a destructive mode switch has been confirmed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardPolicy {
    /// Refuse to discard components that hold content
    RequireConfirmation,
    /// Discard unconditionally
    Confirmed,
}

/// The editable shape of a recipe's ingredients and instructions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RecipeSectionModel {
    /// One implicit section
    Simple {
        #[serde(default = "blank_ingredients")]
        ingredients: Vec<String>,
        #[serde(default)]
        instructions: String,
    },
    /// Ordered named components
    Sectioned { components: Vec<Component> },
}

impl Default for RecipeSectionModel {
    fn default() -> Self {
        Self::empty()
    }
}

impl RecipeSectionModel {
    /// Fresh simple model with a single blank ingredient row
    pub fn empty() -> Self {
        Self::Simple {
            ingredients: blank_ingredients(),
            instructions: String::new(),
        }
    }

    pub fn simple(ingredients: Vec<String>, instructions: impl Into<String>) -> Self {
        Self::Simple {
            ingredients,
            instructions: instructions.into(),
        }
    }

    pub fn sectioned(components: Vec<Component>) -> Self {
        Self::Sectioned { components }
    }

    pub fn is_sectioned(&self) -> bool {
        matches!(self, Self::Sectioned { .. })
    }

    /// Check if no ingredient or instruction text has been entered
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Simple {
                ingredients,
                instructions,
            } => {
                ingredient_lines(ingredients).next().is_none()
                    && instruction_lines(instructions).next().is_none()
            }
            Self::Sectioned { components } => components.iter().all(|c| !c.has_content()),
        }
    }

    /// Components of a sectioned model; empty for a simple model
    pub fn components(&self) -> &[Component] {
        match self {
            Self::Simple { .. } => &[],
            Self::Sectioned { components } => components,
        }
    }

    pub fn component_mut(&mut self, id: &ComponentId) -> Option<&mut Component> {
        match self {
            Self::Simple { .. } => None,
            Self::Sectioned { components } => components.iter_mut().find(|c| &c.id == id),
        }
    }

    /// Switch from simple to sectioned mode
    ///
    /// The current ingredients and instructions move verbatim into a single
    /// component titled `Main`. Does nothing if already sectioned.
    pub fn switch_to_sectioned(&mut self, ids: &mut impl IdGenerator) {
        if let Self::Simple {
            ingredients,
            instructions,
        } = self
        {
            let mut ingredients = std::mem::take(ingredients);
            if ingredients.is_empty() {
                ingredients = blank_ingredients();
            }
            let component = Component::with_content(
                ids.next_id(),
                SectionLabel::main().into_string(),
                ingredients,
                std::mem::take(instructions),
            );
            *self = Self::Sectioned {
                components: vec![component],
            };
        }
    }

    /// Switch from sectioned to simple mode
    ///
    /// All components are discarded and the model resets to an empty simple
    /// model. Unless `policy` is [`DiscardPolicy::Confirmed`], this refuses
    /// when any component holds content. The discarded components are
    /// returned so the caller can offer to restore them.
    pub fn switch_to_simple(
        &mut self,
        policy: DiscardPolicy,
    ) -> Result<Vec<Component>, ValidationError> {
        let Self::Sectioned { components } = self else {
            return Ok(Vec::new());
        };

        if policy == DiscardPolicy::RequireConfirmation && components.iter().any(|c| c.has_content())
        {
            return Err(ValidationError::DiscardRequiresConfirmation {
                components: components.len(),
            });
        }

        let discarded = std::mem::take(components);
        *self = Self::empty();
        Ok(discarded)
    }

    /// Append a blank component, returning its id
    pub fn add_component(&mut self, ids: &mut impl IdGenerator) -> Result<ComponentId, ValidationError> {
        let Self::Sectioned { components } = self else {
            return Err(ValidationError::NotSectioned);
        };
        let id = ids.next_id();
        components.push(Component::new(id.clone()));
        Ok(id)
    }

    /// Remove a component; the last remaining component cannot be removed
    pub fn remove_component(&mut self, id: &ComponentId) -> Result<Component, ValidationError> {
        let Self::Sectioned { components } = self else {
            return Err(ValidationError::NotSectioned);
        };
        let pos = position_of(components, id)?;
        if components.len() == 1 {
            return Err(ValidationError::LastComponent);
        }
        Ok(components.remove(pos))
    }

    /// Move a component to `index`, clamped to the end of the list
    pub fn move_component(&mut self, id: &ComponentId, index: usize) -> Result<(), ValidationError> {
        let Self::Sectioned { components } = self else {
            return Err(ValidationError::NotSectioned);
        };
        let pos = position_of(components, id)?;
        let component = components.remove(pos);
        let index = index.min(components.len());
        components.insert(index, component);
        Ok(())
    }

    /// Flip a component's collapsed flag, returning the new state
    pub fn toggle_collapsed(&mut self, id: &ComponentId) -> Result<bool, ValidationError> {
        let component = self
            .component_mut(id)
            .ok_or_else(|| ValidationError::UnknownComponent(id.to_string()))?;
        component.collapsed = !component.collapsed;
        Ok(component.collapsed)
    }
}

fn position_of(components: &[Component], id: &ComponentId) -> Result<usize, ValidationError> {
    components
        .iter()
        .position(|c| &c.id == id)
        .ok_or_else(|| ValidationError::UnknownComponent(id.to_string()))
}
