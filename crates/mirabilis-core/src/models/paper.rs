//! Scientific paper records
//!
//! A `Paper` entry can be a single publication or an umbrella entry (the
//! 1905 annus mirabilis entry carries its four papers as `SubPaper`
//! records). Later-career entries list their output as `WorkItem` records.

use serde::{Deserialize, Serialize};

/// A scientific paper or group of papers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Unique identifier within the papers category
    pub id: String,
    pub title: String,
    /// Publication year (display value)
    pub year: String,
    /// Journal the paper appeared in
    #[serde(default)]
    pub journal: Option<String>,
    /// Where the work was done
    #[serde(default)]
    pub location: Option<String>,
    /// Submission or publication date
    #[serde(default)]
    pub date: Option<String>,
    pub icon: String,
    pub summary: String,
    /// Scientific context the paper landed in
    pub context: String,
    /// Abstract, where one exists
    #[serde(default)]
    pub r#abstract: Option<String>,
    /// Ordered key equation strings
    #[serde(default)]
    pub key_equations: Option<Vec<String>>,
    /// Predictions the paper made and their fates
    #[serde(default)]
    pub predictions: Option<Vec<Prediction>>,
    /// Constituent papers, for umbrella entries
    #[serde(default)]
    pub papers: Option<Vec<SubPaper>>,
    /// Constituent works, for umbrella entries
    #[serde(default)]
    pub works: Option<Vec<WorkItem>>,
    /// What followed from the paper, if the entry says
    #[serde(default)]
    pub legacy: Option<String>,
}

/// A single paper nested under an umbrella entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubPaper {
    /// Ordinal position within the parent entry
    pub number: i32,
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    /// Subject of the paper
    pub topic: String,
    #[serde(default)]
    pub pages: Option<String>,
    pub r#abstract: String,
    #[serde(default)]
    pub key_concept: Option<String>,
    #[serde(default)]
    pub key_quote: Option<String>,
    #[serde(default)]
    pub key_equation: Option<String>,
    /// Ordered equation strings
    #[serde(default)]
    pub equations: Option<Vec<String>>,
    /// What the paper changed
    pub impact: String,
    /// Note on the Nobel prize, where one applies
    #[serde(default)]
    pub nobel_note: Option<String>,
}

/// A work item nested under an umbrella entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    /// Ordinal position within the parent entry
    pub number: i32,
    pub title: String,
    pub topic: String,
    pub r#abstract: String,
    #[serde(default)]
    pub key_concept: Option<String>,
    #[serde(default)]
    pub key_quote: Option<String>,
    pub impact: String,
}

/// A prediction made by a paper and how it fared
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// The prediction itself
    pub prediction: String,
    /// What the prediction means
    pub description: String,
    /// How and when it was confirmed
    pub confirmed: String,
    /// Why it matters
    pub impact: String,
}
