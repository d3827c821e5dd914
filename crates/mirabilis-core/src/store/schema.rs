//! SQLite schema for the quote store
//!
//! A single `quotes` table plus a `schema_info` table tracking the schema
//! version. There is no migration path between versions: a mismatch is
//! either refused or resolved by discarding and recreating, per the policy
//! the store was opened with.

use rusqlite::{Connection, Result};

/// Current schema version
pub const SCHEMA_VERSION: i32 = 3;

/// Initialize the database schema
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Schema version tracking
        CREATE TABLE IF NOT EXISTS schema_info (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        -- Quotes table
        CREATE TABLE IF NOT EXISTS quotes (
            id TEXT PRIMARY KEY,
            quote_text TEXT NOT NULL,
            attribution TEXT NOT NULL,
            category TEXT,
            created_at INTEGER NOT NULL
        );

        -- Query by category (for filtering)
        CREATE INDEX IF NOT EXISTS idx_quotes_category ON quotes(category);

        -- Query by creation date (for sorting)
        CREATE INDEX IF NOT EXISTS idx_quotes_created_at ON quotes(created_at);
        "#,
    )?;

    // Set schema version
    conn.execute(
        "INSERT OR REPLACE INTO schema_info (key, value) VALUES ('version', ?)",
        [SCHEMA_VERSION.to_string()],
    )?;

    Ok(())
}

/// Drop every table so the schema can be recreated from scratch
pub fn drop_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS quotes;
        DROP TABLE IF EXISTS schema_info;
        "#,
    )
}

/// Get the schema version recorded in the database
///
/// Returns `None` when the `schema_info` table doesn't exist (a fresh
/// database) or carries no version row.
pub fn stored_version(conn: &Connection) -> Result<Option<i32>> {
    let table_exists: bool = conn
        .prepare("SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_info'")?
        .exists([])?;

    if !table_exists {
        return Ok(None);
    }

    let mut stmt = conn.prepare("SELECT value FROM schema_info WHERE key = 'version'")?;
    let result: Result<String> = stmt.query_row([], |row| row.get(0));

    match result {
        Ok(version_str) => Ok(version_str.parse().ok()),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"quotes".to_string()));
        assert!(tables.contains(&"schema_info".to_string()));
    }

    #[test]
    fn test_stored_version() {
        let conn = Connection::open_in_memory().unwrap();

        // Fresh database has no version
        assert_eq!(stored_version(&conn).unwrap(), None);

        init_schema(&conn).unwrap();
        assert_eq!(stored_version(&conn).unwrap(), Some(SCHEMA_VERSION));
    }

    #[test]
    fn test_drop_schema() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        drop_schema(&conn).unwrap();

        assert_eq!(stored_version(&conn).unwrap(), None);
    }

    #[test]
    fn test_indexes_exist() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let indexes: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='index' AND name LIKE 'idx_%'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(indexes.contains(&"idx_quotes_category".to_string()));
        assert!(indexes.contains(&"idx_quotes_created_at".to_string()));
    }
}
