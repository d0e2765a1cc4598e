// src/section/rows.rs

//! Flat, section-labeled row schemas
//!
//! These are the persisted shapes of a recipe's ingredients and steps.
//! Rows coming from a row source are checked with [`IngredientRow::validate`]
//! and [`InstructionRow::validate`] before they reach the partitioner.

use super::label::{SectionLabel, deserialize_nullable};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One persisted ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRow {
    pub item_name: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub section_label: SectionLabel,
    /// Position within its section (1-based), if recorded
    #[serde(default)]
    pub order: Option<i64>,
}

impl IngredientRow {
    /// Create an ingredient row with no quantity, unit, note or order
    pub fn new(item_name: impl Into<String>, section_label: SectionLabel) -> Self {
        Self {
            item_name: item_name.into(),
            quantity: None,
            unit: None,
            note: None,
            section_label,
            order: None,
        }
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    /// Check the row against the persisted schema
    pub fn validate(&self) -> Result<()> {
        if self.item_name.trim().is_empty() {
            return Err(Error::InvalidRow(format!(
                "ingredient in section '{}' has an empty name",
                self.section_label
            )));
        }
        if let Some(order) = self.order
            && order < 1
        {
            return Err(Error::InvalidRow(format!(
                "ingredient '{}' has order {}, expected >= 1",
                self.item_name, order
            )));
        }
        Ok(())
    }
}

/// One persisted instruction step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionRow {
    /// Global step number across all sections of the recipe (1-based)
    pub sequence_number: i64,
    pub body: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub section_label: SectionLabel,
}

impl InstructionRow {
    pub fn new(sequence_number: i64, body: impl Into<String>, section_label: SectionLabel) -> Self {
        Self {
            sequence_number,
            body: body.into(),
            section_label,
        }
    }

    /// Check the row against the persisted schema
    pub fn validate(&self) -> Result<()> {
        if self.sequence_number < 1 {
            return Err(Error::InvalidRow(format!(
                "step in section '{}' has sequence number {}, expected >= 1",
                self.section_label, self.sequence_number
            )));
        }
        if self.body.trim().is_empty() {
            return Err(Error::InvalidRow(format!(
                "step {} in section '{}' has an empty body",
                self.sequence_number, self.section_label
            )));
        }
        Ok(())
    }
}

/// The full flat row set of one recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeRows {
    pub ingredients: Vec<IngredientRow>,
    pub instructions: Vec<InstructionRow>,
}

impl RecipeRows {
    pub fn new(ingredients: Vec<IngredientRow>, instructions: Vec<InstructionRow>) -> Self {
        Self {
            ingredients,
            instructions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.instructions.is_empty()
    }

    /// Validate every row, failing on the first bad one
    pub fn validate(&self) -> Result<()> {
        for row in &self.ingredients {
            row.validate()?;
        }
        for row in &self.instructions {
            row.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_row_defaults() {
        let row = IngredientRow::new("flour", SectionLabel::main());
        assert_eq!(row.item_name, "flour");
        assert!(row.quantity.is_none());
        assert!(row.order.is_none());
        assert!(row.validate().is_ok());
    }

    #[test]
    fn test_ingredient_row_rejects_blank_name() {
        let row = IngredientRow::new("   ", SectionLabel::main());
        assert!(matches!(row.validate(), Err(Error::InvalidRow(_))));
    }

    #[test]
    fn test_ingredient_row_rejects_zero_order() {
        let row = IngredientRow::new("flour", SectionLabel::main()).with_order(0);
        assert!(row.validate().is_err());
    }

    #[test]
    fn test_instruction_row_validation() {
        assert!(InstructionRow::new(1, "Bake", SectionLabel::main()).validate().is_ok());
        assert!(InstructionRow::new(0, "Bake", SectionLabel::main()).validate().is_err());
        assert!(InstructionRow::new(3, " \n", SectionLabel::main()).validate().is_err());
    }

    #[test]
    fn test_missing_label_deserializes_as_main() {
        let row: IngredientRow = serde_json::from_str(r#"{"item_name":"salt"}"#).unwrap();
        assert!(row.section_label.is_main());

        let step: InstructionRow =
            serde_json::from_str(r#"{"sequence_number":1,"body":"Stir"}"#).unwrap();
        assert!(step.section_label.is_main());
    }

    #[test]
    fn test_null_label_deserializes_as_main() {
        let row: IngredientRow =
            serde_json::from_str(r#"{"item_name":"salt","section_label":null}"#).unwrap();
        assert!(row.section_label.is_main());
    }
}
