//! Quote store errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur opening or using the quote store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to create the data directory
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The on-disk schema version doesn't match and recreation wasn't opted into
    #[error(
        "Quote store schema version {found} does not match expected {expected}; \
         opening with ResetPolicy::Recreate discards the data and recreates the store"
    )]
    SchemaMismatch { found: i32, expected: i32 },

    /// SQLite error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_display() {
        let err = StoreError::SchemaMismatch {
            found: 2,
            expected: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("version 2"));
        assert!(msg.contains("expected 3"));
        assert!(msg.contains("Recreate"));
    }
}
