//! Essay command handlers

use anyhow::{Context, Result};

use mirabilis_core::{ContentLibrary, Essay};

use crate::output::Output;

/// List all essays
pub async fn list(library: &ContentLibrary, output: &Output) -> Result<()> {
    let essays: Vec<Essay> = library.load_all().await.context("Failed to load essays")?;

    output.print_essays(&essays);
    Ok(())
}

/// Show a single essay
pub async fn show(library: &ContentLibrary, id: &str, output: &Output) -> Result<()> {
    let essay: Option<Essay> = library
        .get_by_id(id)
        .await
        .context("Failed to load essays")?;

    let essay = essay.ok_or_else(|| anyhow::anyhow!("Essay not found: {}", id))?;
    output.print_essay(&essay);
    Ok(())
}
