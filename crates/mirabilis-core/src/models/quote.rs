//! Quote records
//!
//! Quotes are the one user-managed record type; they live in the SQLite
//! quote store rather than the bundled resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A collected quote with attribution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    /// Unique identifier
    pub id: Uuid,
    /// The quote text
    pub text: String,
    /// Who said or wrote it
    pub attribution: String,
    /// Optional category (e.g. "science", "life")
    pub category: Option<String>,
    /// When this quote was collected
    pub created_at: DateTime<Utc>,
}

impl Quote {
    /// Create a new quote
    pub fn new(text: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            attribution: attribution.into(),
            category: None,
            created_at: Utc::now(),
        }
    }

    /// Create a quote with a specific ID (for loading from storage)
    pub fn with_id(id: Uuid, text: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            attribution: attribution.into(),
            category: None,
            created_at: Utc::now(),
        }
    }

    /// Set the category
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
    }
}
