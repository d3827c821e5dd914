//! Letter records

use serde::{Deserialize, Serialize};

use super::Section;

/// A historical letter, with context and full text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    /// Unique identifier within the letters category
    pub id: String,
    pub title: String,
    /// Date the letter was written (display value, e.g. "August 2, 1939")
    pub date: String,
    pub recipient: String,
    /// Where the letter was written
    pub location: String,
    pub icon: String,
    pub summary: String,
    /// The circumstances surrounding the letter
    pub historical_context: String,
    /// Full text of the letter
    pub full_text: String,
    /// Ordered key points
    pub key_points: Vec<Section>,
    /// What followed from the letter, if the entry says
    #[serde(default)]
    pub legacy: Option<String>,
}
