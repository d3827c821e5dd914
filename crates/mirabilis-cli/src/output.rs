//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use mirabilis_core::{Essay, Letter, MajorWork, Paper, Quote};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    // ==================== Major works ====================

    /// Print a list of major works
    pub fn print_works(&self, works: &[MajorWork]) {
        match self.format {
            OutputFormat::Human => {
                if works.is_empty() {
                    println!("No major works found.");
                    return;
                }
                for work in works {
                    println!(
                        "{} | {} ({}) | {}",
                        work.id,
                        truncate(&work.title, 35),
                        work.year,
                        truncate(&work.subtitle, 40)
                    );
                }
                println!("\n{} work(s)", works.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(works).unwrap());
            }
            OutputFormat::Quiet => {
                for work in works {
                    println!("{}", work.id);
                }
            }
        }
    }

    /// Print a single major work
    pub fn print_work(&self, work: &MajorWork) {
        match self.format {
            OutputFormat::Human => {
                println!("{} ({})", work.title, work.year);
                println!("{}", work.subtitle);
                println!();
                println!("{}", work.summary);
                if let Some(ref equation) = work.key_equation {
                    println!();
                    println!("Key equation: {}", equation);
                    if let Some(ref explanation) = work.key_equation_explanation {
                        println!("{}", explanation);
                    }
                }
                if let Some(ref sections) = work.sections {
                    for section in sections {
                        println!();
                        println!("── {} ──", section.title);
                        println!("{}", section.content);
                    }
                }
                if let Some(ref equations) = work.equations {
                    println!();
                    println!("── Equations ──");
                    for equation in equations {
                        println!("{}  ({})", equation.formula, equation.name);
                        println!("  {}", equation.explanation);
                    }
                }
                if let Some(ref facts) = work.fun_facts {
                    println!();
                    println!("── Fun facts ──");
                    for fact in facts {
                        println!("• {}", fact);
                    }
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(work).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", work.id);
            }
        }
    }

    // ==================== Essays ====================

    /// Print a list of essays
    pub fn print_essays(&self, essays: &[Essay]) {
        match self.format {
            OutputFormat::Human => {
                if essays.is_empty() {
                    println!("No essays found.");
                    return;
                }
                for essay in essays {
                    println!(
                        "{} | {} ({}) | {}",
                        essay.id,
                        truncate(&essay.title, 35),
                        essay.year,
                        truncate(&essay.publication, 30)
                    );
                }
                println!("\n{} essay(s)", essays.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(essays).unwrap());
            }
            OutputFormat::Quiet => {
                for essay in essays {
                    println!("{}", essay.id);
                }
            }
        }
    }

    /// Print a single essay
    pub fn print_essay(&self, essay: &Essay) {
        match self.format {
            OutputFormat::Human => {
                println!("{} ({}, {})", essay.title, essay.publication, essay.year);
                println!();
                println!("\"{}\"", essay.opening_quote);
                println!();
                println!("{}", essay.summary);
                if !essay.themes.is_empty() {
                    println!();
                    println!("Themes: {}", essay.themes.join(", "));
                }
                for point in &essay.key_points {
                    println!();
                    println!("── {} ──", point.title);
                    println!("{}", point.content);
                }
                if let Some(ref aspects) = essay.controversial_aspects {
                    println!();
                    println!("── Controversy ──");
                    for aspect in aspects {
                        println!("• {}", aspect);
                    }
                }
                if !essay.relevance_today.is_empty() {
                    println!();
                    println!("── Relevance today ──");
                    for item in &essay.relevance_today {
                        println!("• {}", item);
                    }
                }
                if let Some(ref thought) = essay.closing_thought {
                    println!();
                    println!("\"{}\"", thought);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(essay).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", essay.id);
            }
        }
    }

    // ==================== Letters ====================

    /// Print a list of letters
    pub fn print_letters(&self, letters: &[Letter]) {
        match self.format {
            OutputFormat::Human => {
                if letters.is_empty() {
                    println!("No letters found.");
                    return;
                }
                for letter in letters {
                    println!(
                        "{} | {} | to {} | {}",
                        letter.id,
                        truncate(&letter.title, 30),
                        truncate(&letter.recipient, 25),
                        letter.date
                    );
                }
                println!("\n{} letter(s)", letters.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(letters).unwrap());
            }
            OutputFormat::Quiet => {
                for letter in letters {
                    println!("{}", letter.id);
                }
            }
        }
    }

    /// Print a single letter, full text included
    pub fn print_letter(&self, letter: &Letter) {
        match self.format {
            OutputFormat::Human => {
                println!("{}", letter.title);
                println!("To:       {}", letter.recipient);
                println!("Date:     {}", letter.date);
                println!("From:     {}", letter.location);
                println!();
                println!("{}", letter.summary);
                println!();
                println!("── Context ──");
                println!("{}", letter.historical_context);
                println!();
                println!("── Text ──");
                println!("{}", letter.full_text);
                for point in &letter.key_points {
                    println!();
                    println!("── {} ──", point.title);
                    println!("{}", point.content);
                }
                if let Some(ref legacy) = letter.legacy {
                    println!();
                    println!("── Legacy ──");
                    println!("{}", legacy);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(letter).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", letter.id);
            }
        }
    }

    // ==================== Papers ====================

    /// Print a list of papers
    pub fn print_papers(&self, papers: &[Paper]) {
        match self.format {
            OutputFormat::Human => {
                if papers.is_empty() {
                    println!("No papers found.");
                    return;
                }
                for paper in papers {
                    let venue = paper.journal.as_deref().unwrap_or("-");
                    println!(
                        "{} | {} ({}) | {}",
                        paper.id,
                        truncate(&paper.title, 35),
                        paper.year,
                        truncate(venue, 35)
                    );
                }
                println!("\n{} paper(s)", papers.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(papers).unwrap());
            }
            OutputFormat::Quiet => {
                for paper in papers {
                    println!("{}", paper.id);
                }
            }
        }
    }

    /// Print a single paper with its nested papers, works, and predictions
    pub fn print_paper(&self, paper: &Paper) {
        match self.format {
            OutputFormat::Human => {
                println!("{} ({})", paper.title, paper.year);
                if let Some(ref journal) = paper.journal {
                    println!("{}", journal);
                }
                if let Some(ref date) = paper.date {
                    println!("{}", date);
                }
                println!();
                println!("{}", paper.summary);
                println!();
                println!("── Context ──");
                println!("{}", paper.context);
                if let Some(ref text) = paper.r#abstract {
                    println!();
                    println!("── Abstract ──");
                    println!("{}", text);
                }
                if let Some(ref equations) = paper.key_equations {
                    println!();
                    println!("── Key equations ──");
                    for equation in equations {
                        println!("  {}", equation);
                    }
                }
                if let Some(ref subs) = paper.papers {
                    for sub in subs {
                        println!();
                        println!("── Paper {}: {} ──", sub.number, sub.title);
                        if let Some(ref date) = sub.date {
                            println!("{} | {}", date, sub.topic);
                        } else {
                            println!("{}", sub.topic);
                        }
                        println!();
                        println!("{}", sub.r#abstract);
                        if let Some(ref concept) = sub.key_concept {
                            println!("Key concept:  {}", concept);
                        }
                        if let Some(ref quote) = sub.key_quote {
                            println!("Key quote:    \"{}\"", quote);
                        }
                        if let Some(ref equation) = sub.key_equation {
                            println!("Key equation: {}", equation);
                        }
                        println!("Impact: {}", sub.impact);
                        if let Some(ref note) = sub.nobel_note {
                            println!("Nobel:  {}", note);
                        }
                    }
                }
                if let Some(ref works) = paper.works {
                    for work in works {
                        println!();
                        println!("── Work {}: {} ──", work.number, work.title);
                        println!("{}", work.topic);
                        println!();
                        println!("{}", work.r#abstract);
                        if let Some(ref concept) = work.key_concept {
                            println!("Key concept: {}", concept);
                        }
                        if let Some(ref quote) = work.key_quote {
                            println!("Key quote:   \"{}\"", quote);
                        }
                        println!("Impact: {}", work.impact);
                    }
                }
                if let Some(ref predictions) = paper.predictions {
                    println!();
                    println!("── Predictions ──");
                    for prediction in predictions {
                        println!("• {}", prediction.prediction);
                        println!("  {}", prediction.description);
                        println!("  Status: {}", prediction.confirmed);
                        println!("  {}", prediction.impact);
                    }
                }
                if let Some(ref legacy) = paper.legacy {
                    println!();
                    println!("── Legacy ──");
                    println!("{}", legacy);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(paper).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", paper.id);
            }
        }
    }

    // ==================== Quotes ====================

    /// Print a list of quotes
    pub fn print_quotes(&self, quotes: &[Quote]) {
        match self.format {
            OutputFormat::Human => {
                if quotes.is_empty() {
                    println!("No quotes found.");
                    return;
                }
                for quote in quotes {
                    let category = quote
                        .category
                        .as_ref()
                        .map(|c| format!(" [{}]", c))
                        .unwrap_or_default();
                    println!(
                        "{} | {}{} - {}",
                        &quote.id.to_string()[..8],
                        truncate(&quote.text, 50),
                        category,
                        quote.attribution
                    );
                }
                println!("\n{} quote(s)", quotes.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(quotes).unwrap());
            }
            OutputFormat::Quiet => {
                for quote in quotes {
                    println!("{}", quote.id);
                }
            }
        }
    }

    /// Print a single quote
    pub fn print_quote(&self, quote: &Quote) {
        match self.format {
            OutputFormat::Human => {
                println!("\"{}\"", quote.text);
                println!("    - {}", quote.attribution);
                if let Some(ref category) = quote.category {
                    println!();
                    println!("Category: {}", category);
                }
                println!("ID:       {}", quote.id);
                println!("Added:    {}", quote.created_at.format("%Y-%m-%d %H:%M"));
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(quote).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", quote.id);
            }
        }
    }

    // ==================== Generic ====================

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Truncate a string to max length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a long string", 10), "this is...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // Truncation counts characters, not bytes
        assert_eq!(truncate("E = mc²", 10), "E = mc²");
        assert_eq!(truncate("ααααααααααα", 8), "ααααα...");
    }
}
