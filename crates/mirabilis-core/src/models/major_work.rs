//! Major work records
//!
//! A major work is a book, theory, or body of work significant enough to get
//! its own entry: title, summary, optional key equation, and optional
//! ordered sections, fun facts, and equations.

use serde::{Deserialize, Serialize};

use super::Section;

/// A major scientific work or theory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MajorWork {
    /// Unique identifier within the major-works category
    pub id: String,
    /// Display title
    pub title: String,
    /// Subtitle shown under the title
    pub subtitle: String,
    /// Publication or formulation year (display value, e.g. "1915")
    pub year: String,
    /// Kind of work (e.g. "theory", "book")
    #[serde(rename = "type")]
    pub work_type: String,
    /// Icon reference used by the presentation layer
    pub icon: String,
    /// Short summary
    pub summary: String,
    /// The signature equation, if the work has one
    #[serde(default)]
    pub key_equation: Option<String>,
    /// Plain-language explanation of the key equation
    #[serde(default)]
    pub key_equation_explanation: Option<String>,
    /// Ordered narrative sections
    #[serde(default)]
    pub sections: Option<Vec<Section>>,
    /// Ordered fun facts
    #[serde(default)]
    pub fun_facts: Option<Vec<String>>,
    /// Ordered equation records
    #[serde(default)]
    pub equations: Option<Vec<Equation>>,
}

/// A named equation with an explanation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Equation {
    /// The formula itself (e.g. "E = mc²")
    pub formula: String,
    /// Human-readable name
    pub name: String,
    /// What the equation says
    pub explanation: String,
}
