//! Paper command handlers

use anyhow::{Context, Result};

use mirabilis_core::{ContentLibrary, Paper};

use crate::output::Output;

/// List all papers
pub async fn list(library: &ContentLibrary, output: &Output) -> Result<()> {
    let papers: Vec<Paper> = library.load_all().await.context("Failed to load papers")?;

    output.print_papers(&papers);
    Ok(())
}

/// Show a single paper
pub async fn show(library: &ContentLibrary, id: &str, output: &Output) -> Result<()> {
    let paper: Option<Paper> = library
        .get_by_id(id)
        .await
        .context("Failed to load papers")?;

    let paper = paper.ok_or_else(|| anyhow::anyhow!("Paper not found: {}", id))?;
    output.print_paper(&paper);
    Ok(())
}
