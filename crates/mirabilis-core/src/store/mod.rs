//! Quote store
//!
//! SQLite-backed storage for user-collected quotes, the one mutable record
//! type in the archive.
//!
//! ## Ownership
//!
//! There is no process-wide singleton. The store is constructed at the
//! application's composition root and passed by reference to consumers.
//! [`StoreCell`] gives construct-once semantics where they are wanted: the
//! first `get_or_open` builds the store, concurrent first calls block until
//! that one construction finishes, and every caller receives the same
//! handle.
//!
//! ## Schema versions
//!
//! There is no migration path between schema versions. A version mismatch
//! on open is refused by default; opening with [`ResetPolicy::Recreate`]
//! logs a warning, discards all data, and recreates the store at the
//! current version.

pub mod error;
pub mod schema;

pub use error::{StoreError, StoreResult};
pub use schema::SCHEMA_VERSION;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::DateTime;
use once_cell::sync::OnceCell;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::warn;
use uuid::Uuid;

use crate::models::Quote;

/// What to do when the on-disk schema version doesn't match the expected one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPolicy {
    /// Refuse to open and return [`StoreError::SchemaMismatch`]
    #[default]
    Refuse,
    /// Log a warning, discard all existing data, and recreate the schema
    Recreate,
}

/// SQLite-backed store for quotes
///
/// Connection access is internally synchronized, so a shared
/// `Arc<QuoteStore>` is safe to use from multiple threads.
pub struct QuoteStore {
    conn: Mutex<Connection>,
}

impl std::fmt::Debug for QuoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteStore").finish_non_exhaustive()
    }
}

impl QuoteStore {
    /// Open the store at the given path, creating it if absent
    ///
    /// Construction failures (directory creation, SQLite open) propagate to
    /// the caller; there is no retry. See [`ResetPolicy`] for what happens
    /// when the on-disk schema version doesn't match.
    pub fn open(path: &Path, policy: ResetPolicy) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Self::ensure_schema(&conn, policy)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory store (for testing)
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        schema::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn ensure_schema(conn: &Connection, policy: ResetPolicy) -> StoreResult<()> {
        match schema::stored_version(conn)? {
            None => {
                schema::init_schema(conn)?;
            }
            Some(version) if version == SCHEMA_VERSION => {}
            Some(found) => match policy {
                ResetPolicy::Refuse => {
                    return Err(StoreError::SchemaMismatch {
                        found,
                        expected: SCHEMA_VERSION,
                    });
                }
                ResetPolicy::Recreate => {
                    warn!(
                        "Quote store schema version {} does not match expected {}; \
                         discarding all data and recreating",
                        found, SCHEMA_VERSION
                    );
                    schema::drop_schema(conn)?;
                    schema::init_schema(conn)?;
                }
            },
        }
        Ok(())
    }

    // A poisoned lock only means another thread panicked mid-query; the
    // connection itself remains usable.
    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Add a new quote
    pub fn add(&self, quote: &Quote) -> StoreResult<()> {
        self.conn().execute(
            "INSERT INTO quotes (id, quote_text, attribution, category, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                quote.id.to_string(),
                quote.text,
                quote.attribution,
                quote.category,
                quote.created_at.timestamp_millis(),
            ],
        )?;
        Ok(())
    }

    /// Update an existing quote
    ///
    /// Returns `false` when no quote with that id exists.
    pub fn update(&self, quote: &Quote) -> StoreResult<bool> {
        let changed = self.conn().execute(
            "UPDATE quotes SET quote_text = ?2, attribution = ?3, category = ?4 WHERE id = ?1",
            params![
                quote.id.to_string(),
                quote.text,
                quote.attribution,
                quote.category,
            ],
        )?;
        Ok(changed > 0)
    }

    /// Get a quote by ID
    pub fn get(&self, id: Uuid) -> StoreResult<Option<Quote>> {
        let quote = self
            .conn()
            .query_row(
                "SELECT id, quote_text, attribution, category, created_at
                 FROM quotes WHERE id = ?1",
                params![id.to_string()],
                row_to_quote,
            )
            .optional()?;
        Ok(quote)
    }

    /// Get all quotes, newest first
    pub fn all(&self) -> StoreResult<Vec<Quote>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, quote_text, attribution, category, created_at
             FROM quotes ORDER BY created_at DESC",
        )?;
        let quotes = stmt
            .query_map([], row_to_quote)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(quotes)
    }

    /// Get quotes in a category, newest first
    pub fn by_category(&self, category: &str) -> StoreResult<Vec<Quote>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, quote_text, attribution, category, created_at
             FROM quotes WHERE category = ?1 ORDER BY created_at DESC",
        )?;
        let quotes = stmt
            .query_map(params![category], row_to_quote)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(quotes)
    }

    /// Get one quote at random, or `None` when the store is empty
    pub fn random(&self) -> StoreResult<Option<Quote>> {
        let quote = self
            .conn()
            .query_row(
                "SELECT id, quote_text, attribution, category, created_at
                 FROM quotes ORDER BY RANDOM() LIMIT 1",
                [],
                row_to_quote,
            )
            .optional()?;
        Ok(quote)
    }

    /// Delete a quote by ID
    ///
    /// Returns `false` when no quote with that id exists.
    pub fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let changed = self
            .conn()
            .execute("DELETE FROM quotes WHERE id = ?1", params![id.to_string()])?;
        Ok(changed > 0)
    }

    /// Number of quotes in the store
    pub fn count(&self) -> StoreResult<i64> {
        let count = self
            .conn()
            .query_row("SELECT COUNT(*) FROM quotes", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn row_to_quote(row: &rusqlite::Row<'_>) -> rusqlite::Result<Quote> {
    let id_text: String = row.get(0)?;
    let id = Uuid::parse_str(&id_text).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let millis: i64 = row.get(4)?;

    Ok(Quote {
        id,
        text: row.get(1)?,
        attribution: row.get(2)?,
        category: row.get(3)?,
        created_at: DateTime::from_timestamp_millis(millis).unwrap_or_default(),
    })
}

/// Construct-once holder for a shared quote store
///
/// Owned by the composition root, handed by reference to whatever needs the
/// store. The underlying store is constructed at most once, even when
/// `get_or_open` races from multiple threads; every caller receives the same
/// `Arc`. A failed construction is not cached, so a later call may retry.
pub struct StoreCell {
    path: PathBuf,
    policy: ResetPolicy,
    cell: OnceCell<Arc<QuoteStore>>,
}

impl StoreCell {
    /// Create a cell that will open the store at `path` on first use
    pub fn new(path: impl Into<PathBuf>, policy: ResetPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
            cell: OnceCell::new(),
        }
    }

    /// Get the shared store handle, opening the store on first call
    pub fn get_or_open(&self) -> StoreResult<Arc<QuoteStore>> {
        self.cell
            .get_or_try_init(|| QuoteStore::open(&self.path, self.policy).map(Arc::new))
            .map(Arc::clone)
    }

    /// The path the store lives at
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_quote(text: &str) -> Quote {
        Quote::new(text, "Albert Einstein")
    }

    #[test]
    fn test_add_and_get() {
        let store = QuoteStore::open_in_memory().unwrap();
        let mut quote = sample_quote("Imagination is more important than knowledge.");
        quote.set_category(Some("science".to_string()));

        store.add(&quote).unwrap();

        let loaded = store.get(quote.id).unwrap().unwrap();
        assert_eq!(loaded.id, quote.id);
        assert_eq!(loaded.text, quote.text);
        assert_eq!(loaded.attribution, quote.attribution);
        assert_eq!(loaded.category, quote.category);
        assert_eq!(
            loaded.created_at.timestamp_millis(),
            quote.created_at.timestamp_millis()
        );
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = QuoteStore::open_in_memory().unwrap();
        assert!(store.get(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_all_and_count() {
        let store = QuoteStore::open_in_memory().unwrap();
        store.add(&sample_quote("one")).unwrap();
        store.add(&sample_quote("two")).unwrap();

        assert_eq!(store.count().unwrap(), 2);
        assert_eq!(store.all().unwrap().len(), 2);
    }

    #[test]
    fn test_by_category() {
        let store = QuoteStore::open_in_memory().unwrap();

        let mut science = sample_quote("on physics");
        science.set_category(Some("science".to_string()));
        store.add(&science).unwrap();

        let mut life = sample_quote("on life");
        life.set_category(Some("life".to_string()));
        store.add(&life).unwrap();

        store.add(&sample_quote("uncategorized")).unwrap();

        let quotes = store.by_category("science").unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].text, "on physics");
    }

    #[test]
    fn test_update() {
        let store = QuoteStore::open_in_memory().unwrap();
        let mut quote = sample_quote("original");
        store.add(&quote).unwrap();

        quote.text = "revised".to_string();
        assert!(store.update(&quote).unwrap());

        let loaded = store.get(quote.id).unwrap().unwrap();
        assert_eq!(loaded.text, "revised");

        // Updating a missing quote reports false
        assert!(!store.update(&sample_quote("never added")).unwrap());
    }

    #[test]
    fn test_delete() {
        let store = QuoteStore::open_in_memory().unwrap();
        let quote = sample_quote("to delete");
        store.add(&quote).unwrap();

        assert!(store.delete(quote.id).unwrap());
        assert!(store.get(quote.id).unwrap().is_none());
        assert!(!store.delete(quote.id).unwrap());
    }

    #[test]
    fn test_random() {
        let store = QuoteStore::open_in_memory().unwrap();
        assert!(store.random().unwrap().is_none());

        let quote = sample_quote("the only one");
        store.add(&quote).unwrap();
        assert_eq!(store.random().unwrap().unwrap().id, quote.id);
    }

    #[test]
    fn test_persistence_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quotes.db");
        let quote = sample_quote("persisted");

        {
            let store = QuoteStore::open(&path, ResetPolicy::Refuse).unwrap();
            store.add(&quote).unwrap();
        }

        let store = QuoteStore::open(&path, ResetPolicy::Refuse).unwrap();
        let loaded = store.get(quote.id).unwrap().unwrap();
        assert_eq!(loaded.text, "persisted");
    }

    fn downgrade_stored_version(path: &Path, version: i32) {
        let conn = Connection::open(path).unwrap();
        conn.execute(
            "UPDATE schema_info SET value = ?1 WHERE key = 'version'",
            params![version.to_string()],
        )
        .unwrap();
    }

    #[test]
    fn test_schema_mismatch_refused_by_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quotes.db");

        {
            let store = QuoteStore::open(&path, ResetPolicy::Refuse).unwrap();
            store.add(&sample_quote("old data")).unwrap();
        }
        downgrade_stored_version(&path, 2);

        let err = QuoteStore::open(&path, ResetPolicy::Refuse).unwrap_err();
        assert!(matches!(
            err,
            StoreError::SchemaMismatch {
                found: 2,
                expected: SCHEMA_VERSION
            }
        ));
    }

    #[test]
    fn test_schema_mismatch_recreate_discards_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quotes.db");

        {
            let store = QuoteStore::open(&path, ResetPolicy::Refuse).unwrap();
            store.add(&sample_quote("doomed")).unwrap();
        }
        downgrade_stored_version(&path, 2);

        let store = QuoteStore::open(&path, ResetPolicy::Recreate).unwrap();
        assert_eq!(store.count().unwrap(), 0);

        // Recreated store is back at the current version and usable
        store.add(&sample_quote("fresh start")).unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_store_cell_returns_same_handle() {
        let dir = TempDir::new().unwrap();
        let cell = StoreCell::new(dir.path().join("quotes.db"), ResetPolicy::Refuse);

        let first = cell.get_or_open().unwrap();
        let second = cell.get_or_open().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_store_cell_concurrent_first_calls() {
        let dir = TempDir::new().unwrap();
        let cell = StoreCell::new(dir.path().join("quotes.db"), ResetPolicy::Refuse);

        let handles: Vec<Arc<QuoteStore>> = std::thread::scope(|scope| {
            let threads: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| cell.get_or_open().unwrap()))
                .collect();
            threads.into_iter().map(|t| t.join().unwrap()).collect()
        });

        // Every caller got the same underlying store
        for handle in &handles[1..] {
            assert!(Arc::ptr_eq(&handles[0], handle));
        }

        // And it works
        handles[0].add(&sample_quote("from one of many")).unwrap();
        assert_eq!(handles[7].count().unwrap(), 1);
    }
}
