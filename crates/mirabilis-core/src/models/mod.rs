//! Data models for the mirabilis archive
//!
//! Content records (major works, essays, letters, papers) are immutable
//! value types deserialized from the bundled JSON resources. Field names in
//! those resources are camelCase; every content record carries
//! `#[serde(rename_all = "camelCase")]`.
//!
//! Quotes are the one user-managed record type and live in the quote store.

mod essay;
mod letter;
mod major_work;
mod paper;
mod quote;

pub use essay::Essay;
pub use letter::Letter;
pub use major_work::{Equation, MajorWork};
pub use paper::{Paper, Prediction, SubPaper, WorkItem};
pub use quote::Quote;

use serde::{Deserialize, Serialize};

/// A titled block of prose
///
/// Used both for the sections of a major work and for the key points of
/// essays and letters; the JSON shape is identical.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Section heading
    pub title: String,
    /// Section body
    pub content: String,
}
