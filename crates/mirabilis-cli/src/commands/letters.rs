//! Letter command handlers

use anyhow::{Context, Result};

use mirabilis_core::{ContentLibrary, Letter};

use crate::output::Output;

/// List all letters
pub async fn list(library: &ContentLibrary, output: &Output) -> Result<()> {
    let letters: Vec<Letter> = library.load_all().await.context("Failed to load letters")?;

    output.print_letters(&letters);
    Ok(())
}

/// Show a single letter
pub async fn show(library: &ContentLibrary, id: &str, output: &Output) -> Result<()> {
    let letter: Option<Letter> = library
        .get_by_id(id)
        .await
        .context("Failed to load letters")?;

    let letter = letter.ok_or_else(|| anyhow::anyhow!("Letter not found: {}", id))?;
    output.print_letter(&letter);
    Ok(())
}
