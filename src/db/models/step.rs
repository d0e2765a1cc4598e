// src/db/models/step.rs

//! Instruction rows as stored in `recipe_steps`

use crate::error::Result;
use crate::section::{InstructionRow, SectionLabel};
use rusqlite::{Connection, Row, params};

/// Database representation of one instruction step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepEntry {
    pub id: Option<i64>,
    pub recipe_id: i64,
    pub sequence_number: i64,
    pub body: String,
    pub section_label: Option<String>,
}

impl StepEntry {
    pub fn new(recipe_id: i64, sequence_number: i64, body: String) -> Self {
        Self {
            id: None,
            recipe_id,
            sequence_number,
            body,
            section_label: None,
        }
    }

    pub fn from_section_row(recipe_id: i64, row: &InstructionRow) -> Self {
        Self {
            id: None,
            recipe_id,
            sequence_number: row.sequence_number,
            body: row.body.clone(),
            section_label: Some(row.section_label.as_str().to_string()),
        }
    }

    /// Convert to a section row; a missing label becomes `Main`
    pub fn to_section_row(&self) -> InstructionRow {
        InstructionRow::new(
            self.sequence_number,
            self.body.clone(),
            SectionLabel::from_stored(self.section_label.as_deref()),
        )
    }

    /// Insert this step into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO recipe_steps (recipe_id, sequence_number, body, section_label)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                &self.recipe_id,
                &self.sequence_number,
                &self.body,
                &self.section_label,
            ],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// All steps of a recipe, by sequence number
    pub fn find_by_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, recipe_id, sequence_number, body, section_label
             FROM recipe_steps WHERE recipe_id = ?1 ORDER BY sequence_number",
        )?;

        let steps = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(steps)
    }

    /// Delete every step of a recipe, returning how many went
    pub fn delete_by_recipe(conn: &Connection, recipe_id: i64) -> Result<usize> {
        let count = conn.execute("DELETE FROM recipe_steps WHERE recipe_id = ?1", [recipe_id])?;
        Ok(count)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            recipe_id: row.get(1)?,
            sequence_number: row.get(2)?,
            body: row.get(3)?,
            section_label: row.get(4)?,
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

    #[test]
    fn test_steps_ordered_by_sequence() {
        let (_temp, conn) = create_test_db();
        let recipe_id = Recipe::new("Stew".to_string()).insert(&conn).unwrap();

        StepEntry::new(recipe_id, 2, "Simmer".to_string()).insert(&conn).unwrap();
        StepEntry::new(recipe_id, 1, "Brown the meat".to_string()).insert(&conn).unwrap();

        let steps = StepEntry::find_by_recipe(&conn, recipe_id).unwrap();
        let bodies: Vec<_> = steps.iter().map(|s| s.body.as_str()).collect();
        assert_eq!(bodies, vec!["Brown the meat", "Simmer"]);
        assert!(steps[0].to_section_row().section_label.is_main());
    }

    #[test]
    fn test_duplicate_sequence_rejected() {
        let (_temp, conn) = create_test_db();
        let recipe_id = Recipe::new("Stew".to_string()).insert(&conn).unwrap();

        StepEntry::new(recipe_id, 1, "Chop".to_string()).insert(&conn).unwrap();
        assert!(StepEntry::new(recipe_id, 1, "Fry".to_string()).insert(&conn).is_err());
    }

    #[test]
    fn test_delete_by_recipe() {
        let (_temp, conn) = create_test_db();
        let recipe_id = Recipe::new("Stew".to_string()).insert(&conn).unwrap();
        StepEntry::new(recipe_id, 1, "Chop".to_string()).insert(&conn).unwrap();

        assert_eq!(StepEntry::delete_by_recipe(&conn, recipe_id).unwrap(), 1);
        assert_eq!(StepEntry::delete_by_recipe(&conn, recipe_id).unwrap(), 0);
    }
}
