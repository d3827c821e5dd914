//! Major works command handlers

use anyhow::{Context, Result};

use mirabilis_core::{ContentLibrary, MajorWork};

use crate::output::Output;

/// List all major works
pub async fn list(library: &ContentLibrary, output: &Output) -> Result<()> {
    let works: Vec<MajorWork> = library
        .load_all()
        .await
        .context("Failed to load major works")?;

    output.print_works(&works);
    Ok(())
}

/// Show a single major work
pub async fn show(library: &ContentLibrary, id: &str, output: &Output) -> Result<()> {
    let work: Option<MajorWork> = library
        .get_by_id(id)
        .await
        .context("Failed to load major works")?;

    let work = work.ok_or_else(|| anyhow::anyhow!("Major work not found: {}", id))?;
    output.print_work(&work);
    Ok(())
}
