//! Quote command handlers

use anyhow::{bail, Context, Result};
use uuid::Uuid;

use mirabilis_core::{Quote, QuoteStore};

use crate::output::{Output, OutputFormat};

/// Add a new quote
pub fn create(
    store: &QuoteStore,
    text: String,
    by: String,
    category: Option<String>,
    output: &Output,
) -> Result<()> {
    let mut quote = Quote::new(text, by);
    quote.set_category(category);

    store.add(&quote).context("Failed to add quote")?;

    output.success(&format!("Added quote: {}", quote.id));
    output.print_quote(&quote);

    Ok(())
}

/// List all quotes, optionally filtered by category
pub fn list(store: &QuoteStore, category: Option<String>, output: &Output) -> Result<()> {
    let quotes = match category {
        Some(ref c) => store.by_category(c)?,
        None => store.all()?,
    };

    output.print_quotes(&quotes);
    Ok(())
}

/// Show a single quote
pub fn show(store: &QuoteStore, id: String, output: &Output) -> Result<()> {
    let uuid = parse_quote_id(&id, store)?;

    let quote = store
        .get(uuid)?
        .ok_or_else(|| anyhow::anyhow!("Quote not found: {}", id))?;

    output.print_quote(&quote);
    Ok(())
}

/// Show a random quote
pub fn random(store: &QuoteStore, output: &Output) -> Result<()> {
    match store.random()? {
        Some(quote) => output.print_quote(&quote),
        None => output.message("No quotes collected yet."),
    }
    Ok(())
}

/// Delete a quote
pub fn delete(store: &QuoteStore, id: String, output: &Output) -> Result<()> {
    let uuid = parse_quote_id(&id, store)?;

    if !store.delete(uuid)? {
        bail!("Quote not found: {}", id);
    }

    output.success(&format!("Deleted quote: {}", uuid));
    Ok(())
}

/// Count collected quotes
pub fn count(store: &QuoteStore, output: &Output) -> Result<()> {
    let count = store.count()?;
    match output.format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "count": count })),
        OutputFormat::Quiet => println!("{}", count),
        OutputFormat::Human => println!("{} quote(s) collected", count),
    }
    Ok(())
}

/// Resolve a full UUID or unambiguous prefix to a quote ID
fn parse_quote_id(id: &str, store: &QuoteStore) -> Result<Uuid> {
    if let Ok(uuid) = Uuid::parse_str(id) {
        return Ok(uuid);
    }

    let matches: Vec<Uuid> = store
        .all()?
        .iter()
        .map(|q| q.id)
        .filter(|uuid| uuid.to_string().starts_with(id))
        .collect();

    match matches.len() {
        0 => bail!("No quote matches ID prefix '{}'", id),
        1 => Ok(matches[0]),
        n => bail!("ID prefix '{}' is ambiguous ({} matches)", id, n),
    }
}
