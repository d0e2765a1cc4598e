// src/db/models/recipe.rs

//! Recipe model - the header record that ingredient and step rows hang off

use crate::error::{Result, ValidationError};
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who may see a recipe in the community feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Private,
    Friends,
    Public,
}

impl Visibility {
    pub fn as_str(&self) -> &str {
        match self {
            Visibility::Private => "private",
            Visibility::Friends => "friends",
            Visibility::Public => "public",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "private" => Ok(Visibility::Private),
            "friends" => Ok(Visibility::Friends),
            "public" => Ok(Visibility::Public),
            _ => Err(format!("Invalid visibility: {s}")),
        }
    }
}

/// A stored recipe header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub visibility: Visibility,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Recipe {
    /// Create a new private recipe
    pub fn new(title: String) -> Self {
        Self {
            id: None,
            title,
            description: None,
            visibility: Visibility::Private,
            created_at: None,
            updated_at: None,
        }
    }

    /// Check the header fields a user must fill in
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        Ok(())
    }

    /// Insert this recipe into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO recipes (title, description, visibility) VALUES (?1, ?2, ?3)",
            params![self.title.trim(), &self.description, self.visibility.as_str()],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Write the header fields back and bump `updated_at`
    pub fn update(&mut self, conn: &Connection) -> Result<()> {
        if let Some(id) = self.id {
            let now = timestamp();
            conn.execute(
                "UPDATE recipes SET title = ?1, description = ?2, visibility = ?3, updated_at = ?4
                 WHERE id = ?5",
                params![self.title.trim(), &self.description, self.visibility.as_str(), &now, id],
            )?;
            self.updated_at = Some(now);
        }
        Ok(())
    }

    /// Bump `updated_at` without changing anything else
    pub fn touch(conn: &Connection, id: i64) -> Result<()> {
        conn.execute(
            "UPDATE recipes SET updated_at = ?1 WHERE id = ?2",
            params![timestamp(), id],
        )?;
        Ok(())
    }

    /// Find a recipe by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, title, description, visibility, created_at, updated_at
             FROM recipes WHERE id = ?1",
        )?;

        let recipe = stmt.query_row([id], Self::from_row).optional()?;
        Ok(recipe)
    }

    /// List all recipes, newest first
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, title, description, visibility, created_at, updated_at
             FROM recipes ORDER BY created_at DESC, id DESC",
        )?;

        let recipes = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// List recipes with the given visibility, newest first
    pub fn find_by_visibility(conn: &Connection, visibility: Visibility) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, title, description, visibility, created_at, updated_at
             FROM recipes WHERE visibility = ?1 ORDER BY created_at DESC, id DESC",
        )?;

        let recipes = stmt
            .query_map([visibility.as_str()], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// Delete a recipe; its ingredient and step rows go with it
    pub fn delete(conn: &Connection, id: i64) -> Result<()> {
        conn.execute("DELETE FROM recipes WHERE id = ?1", [id])?;
        Ok(())
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let visibility_str: String = row.get(3)?;
        let visibility = visibility_str.parse::<Visibility>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
            )
        })?;

        Ok(Self {
            id: Some(row.get(0)?),
            title: row.get(1)?,
            description: row.get(2)?,
            visibility,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }
}

fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
