// src/db/mod.rs

//! SQLite storage for recipes and their section-labeled rows

pub mod migrations;
pub mod models;
pub mod schema;
mod store;

pub(crate) use store::write_rows;

use crate::error::{Error, Result};
use rusqlite::{Connection, Transaction};
use std::path::Path;
use tracing::{debug, info};

/// Create (or upgrade) the database at `db_path`
pub fn init(db_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(db_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    info!("Initializing database at {}", db_path);
    let conn = Connection::open(db_path)?;
    configure(&conn)?;
    schema::migrate(&conn)?;
    Ok(())
}

/// Open an existing database
pub fn open(db_path: &str) -> Result<Connection> {
    if !Path::new(db_path).exists() {
        return Err(Error::NotFound(format!(
            "Database at {} (run 'recipebox init' first)",
            db_path
        )));
    }

    debug!("Opening database at {}", db_path);
    let conn = Connection::open(db_path)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory database with the current schema
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    schema::migrate(&conn)?;
    Ok(conn)
}

/// Run `f` inside a transaction, committing only if it succeeds
pub fn transaction<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    let tx = conn.transaction()?;
    let result = f(&tx)?;
    tx.commit()?;
    Ok(result)
}

fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_and_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("recipes.db");
        let path = path.to_str().unwrap();

        assert!(matches!(open(path), Err(Error::NotFound(_))));
        init(path).unwrap();
        let conn = open(path).unwrap();
        assert_eq!(schema::get_schema_version(&conn).unwrap(), schema::SCHEMA_VERSION);
    }

    #[test]
    fn test_transaction_rolls_back_on_error() {
        let mut conn = open_in_memory().unwrap();

        let result: Result<()> = transaction(&mut conn, |tx| {
            tx.execute("INSERT INTO recipes (title) VALUES ('Bread')", [])?;
            Err(Error::NotFound("anything".to_string()))
        });
        assert!(result.is_err());

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
