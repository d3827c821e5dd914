//! Status command handler

use anyhow::Result;

use mirabilis_core::{Config, ContentLibrary, Essay, Letter, MajorWork, Paper, StoreCell};

use crate::output::{Output, OutputFormat};

/// Show archive status
///
/// Content counts use the fail-soft loader on purpose: a status report
/// should describe a broken content directory (as zero entries), not die
/// on it.
pub async fn show(
    config: &Config,
    library: &ContentLibrary,
    store: &StoreCell,
    output: &Output,
) -> Result<()> {
    let works = library.load_all_or_empty::<MajorWork>().await.len();
    let essays = library.load_all_or_empty::<Essay>().await.len();
    let letters = library.load_all_or_empty::<Letter>().await.len();
    let papers = library.load_all_or_empty::<Paper>().await.len();

    let quotes = store.get_or_open()?.count()?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "content_source": config
                        .content_dir
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "bundled".to_string()),
                    "quotes_db": store.path(),
                    "counts": {
                        "major_works": works,
                        "essays": essays,
                        "letters": letters,
                        "papers": papers,
                        "quotes": quotes
                    }
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", works + essays + letters + papers);
        }
        OutputFormat::Human => {
            println!("mirabilis Status");
            println!("================");
            println!();
            println!("Content:");
            println!(
                "  Source:      {}",
                config
                    .content_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "bundled".to_string())
            );
            println!("  Major works: {}", works);
            println!("  Essays:      {}", essays);
            println!("  Letters:     {}", letters);
            println!("  Papers:      {}", papers);
            println!();
            println!("Quotes:");
            println!("  Database: {}", store.path().display());
            println!("  Count:    {}", quotes);
        }
    }

    Ok(())
}
