// src/db/models/ingredient.rs

//! Ingredient rows as stored in `recipe_ingredients`

use crate::error::Result;
use crate::section::{IngredientRow, SectionLabel};
use rusqlite::{Connection, Row, params};

/// Database representation of one ingredient line
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientEntry {
    pub id: Option<i64>,
    pub recipe_id: i64,
    pub item_name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub note: Option<String>,
    pub section_label: Option<String>,
    pub sort_order: Option<i64>,
}

impl IngredientEntry {
    /// Create a new entry in the default section
    pub fn new(recipe_id: i64, item_name: String) -> Self {
        Self {
            id: None,
            recipe_id,
            item_name,
            quantity: None,
            unit: None,
            note: None,
            section_label: None,
            sort_order: None,
        }
    }

    pub fn from_section_row(recipe_id: i64, row: &IngredientRow) -> Self {
        Self {
            id: None,
            recipe_id,
            item_name: row.item_name.clone(),
            quantity: row.quantity,
            unit: row.unit.clone(),
            note: row.note.clone(),
            section_label: Some(row.section_label.as_str().to_string()),
            sort_order: row.order,
        }
    }

    /// Convert to a section row; a missing label becomes `Main`
    pub fn to_section_row(&self) -> IngredientRow {
        IngredientRow {
            item_name: self.item_name.clone(),
            quantity: self.quantity,
            unit: self.unit.clone(),
            note: self.note.clone(),
            section_label: SectionLabel::from_stored(self.section_label.as_deref()),
            order: self.sort_order,
        }
    }

    /// Insert this entry into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO recipe_ingredients
                (recipe_id, item_name, quantity, unit, note, section_label, sort_order)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                &self.recipe_id,
                &self.item_name,
                &self.quantity,
                &self.unit,
                &self.note,
                &self.section_label,
                &self.sort_order,
            ],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// All ingredient entries of a recipe, in insertion order
    pub fn find_by_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, recipe_id, item_name, quantity, unit, note, section_label, sort_order
             FROM recipe_ingredients WHERE recipe_id = ?1 ORDER BY id",
        )?;

        let entries = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Delete every ingredient entry of a recipe, returning how many went
    pub fn delete_by_recipe(conn: &Connection, recipe_id: i64) -> Result<usize> {
        let count = conn.execute(
            "DELETE FROM recipe_ingredients WHERE recipe_id = ?1",
            [recipe_id],
        )?;
        Ok(count)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            recipe_id: row.get(1)?,
            item_name: row.get(2)?,
            quantity: row.get(3)?,
            unit: row.get(4)?,
            note: row.get(5)?,
            section_label: row.get(6)?,
            sort_order: row.get(7)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Recipe;
    use crate::db::schema;
    use tempfile::NamedTempFile;

    fn create_test_db() -> (NamedTempFile, Connection) {
        let temp_file = NamedTempFile::new().unwrap();
        let conn = Connection::open(temp_file.path()).unwrap();
        conn.execute("PRAGMA foreign_keys = ON", []).unwrap();
        schema::migrate(&conn).unwrap();
        (temp_file, conn)
    }

    fn create_test_recipe(conn: &Connection) -> i64 {
        Recipe::new("Pancakes".to_string()).insert(conn).unwrap()
    }

    #[test]
    fn test_ingredient_crud() {
        let (_temp, conn) = create_test_db();
        let recipe_id = create_test_recipe(&conn);

        let mut flour = IngredientEntry::new(recipe_id, "flour".to_string());
        flour.quantity = Some(1.5);
        flour.unit = Some("cup".to_string());
        flour.insert(&conn).unwrap();
        let mut milk = IngredientEntry::new(recipe_id, "milk".to_string());
        milk.section_label = Some("Batter".to_string());
        milk.sort_order = Some(1);
        milk.insert(&conn).unwrap();

        let entries = IngredientEntry::find_by_recipe(&conn, recipe_id).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].item_name, "flour");
        assert_eq!(entries[0].quantity, Some(1.5));
        assert_eq!(entries[1].section_label.as_deref(), Some("Batter"));

        assert_eq!(IngredientEntry::delete_by_recipe(&conn, recipe_id).unwrap(), 2);
        assert!(IngredientEntry::find_by_recipe(&conn, recipe_id).unwrap().is_empty());
    }

    #[test]
    fn test_null_label_becomes_main() {
        let entry = IngredientEntry::new(1, "salt".to_string());
        let row = entry.to_section_row();
        assert!(row.section_label.is_main());
        assert_eq!(row.item_name, "salt");
    }

    #[test]
    fn test_entries_removed_with_recipe() {
        let (_temp, conn) = create_test_db();
        let recipe_id = create_test_recipe(&conn);
        IngredientEntry::new(recipe_id, "eggs".to_string())
            .insert(&conn)
            .unwrap();

        Recipe::delete(&conn, recipe_id).unwrap();
        assert!(IngredientEntry::find_by_recipe(&conn, recipe_id).unwrap().is_empty());
    }
}
