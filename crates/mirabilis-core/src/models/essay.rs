//! Essay records

use serde::{Deserialize, Serialize};

use super::Section;

/// A published essay or article
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Essay {
    /// Unique identifier within the essays category
    pub id: String,
    pub title: String,
    /// Publication year (display value)
    pub year: String,
    /// Where the essay first appeared
    pub publication: String,
    pub icon: String,
    pub summary: String,
    /// Quote that opens the essay entry
    pub opening_quote: String,
    /// Ordered theme strings
    pub themes: Vec<String>,
    /// Ordered key points
    pub key_points: Vec<Section>,
    /// Aspects that drew controversy, if any
    #[serde(default)]
    pub controversial_aspects: Option<Vec<String>>,
    /// Why the essay still matters; empty when the entry doesn't say
    #[serde(default)]
    pub relevance_today: Vec<String>,
    /// Closing thought, if the entry has one
    #[serde(default)]
    pub closing_thought: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_essay_parse() {
        let json = r#"{
            "id": "why-socialism",
            "title": "Why Socialism?",
            "year": "1949",
            "publication": "Monthly Review",
            "icon": "scroll",
            "summary": "An argument for a planned economy.",
            "openingQuote": "Man is, at one and the same time, a solitary being and a social being.",
            "themes": ["economics", "society"],
            "keyPoints": [{"title": "The social being", "content": "..."}],
            "controversialAspects": ["Published at the height of the Red Scare."],
            "relevanceToday": ["Inequality debates"],
            "closingThought": "Clarity about aims."
        }"#;

        let essay: Essay = serde_json::from_str(json).unwrap();
        assert_eq!(essay.id, "why-socialism");
        assert_eq!(essay.themes.len(), 2);
        assert_eq!(essay.key_points[0].title, "The social being");
        assert_eq!(essay.relevance_today, vec!["Inequality debates"]);
        assert!(essay.closing_thought.is_some());
    }

    #[test]
    fn test_essay_optional_fields_absent() {
        let json = r#"{
            "id": "e1",
            "title": "T",
            "year": "1931",
            "publication": "P",
            "icon": "i",
            "summary": "s",
            "openingQuote": "q",
            "themes": [],
            "keyPoints": []
        }"#;

        let essay: Essay = serde_json::from_str(json).unwrap();
        assert!(essay.controversial_aspects.is_none());
        // relevanceToday defaults to empty rather than failing the parse
        assert!(essay.relevance_today.is_empty());
        assert!(essay.closing_thought.is_none());
    }
}
