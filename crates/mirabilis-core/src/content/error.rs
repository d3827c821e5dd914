//! Content loading errors
//!
//! Load failures are typed so callers can tell an empty category apart from
//! a failed load. The legacy fail-soft behavior is available through
//! `ContentLibrary::load_all_or_empty`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::Category;

/// Errors that can occur while loading a content category
#[derive(Error, Debug)]
pub enum ContentError {
    /// The category's resource file is missing
    #[error("No {category} resource found at '{path}'")]
    NotFound { category: Category, path: PathBuf },

    /// The resource file exists but couldn't be read
    #[error("Failed to read {category} resource from '{path}': {source}")]
    Read {
        category: Category,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The resource was read but doesn't deserialize into the expected shape
    #[error("Malformed {category} resource: {source}")]
    Malformed {
        category: Category,
        #[source]
        source: serde_json::Error,
    },
}

impl ContentError {
    /// The category the failed load was for
    pub fn category(&self) -> Category {
        match self {
            ContentError::NotFound { category, .. }
            | ContentError::Read { category, .. }
            | ContentError::Malformed { category, .. } => *category,
        }
    }
}

/// Result type for content operations
pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ContentError::NotFound {
            category: Category::Essays,
            path: PathBuf::from("/content/essays.json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("essays"));
        assert!(msg.contains("/content/essays.json"));
        assert_eq!(err.category(), Category::Essays);
    }

    #[test]
    fn test_malformed_display() {
        let source = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err = ContentError::Malformed {
            category: Category::Papers,
            source,
        };
        assert!(err.to_string().contains("Malformed papers resource"));
    }
}
