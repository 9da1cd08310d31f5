//! Status command handler

use anyhow::Result;

use zentab_core::Store;

use crate::output::{Output, OutputFormat};

/// Show status information
pub fn show(store: &Store, output: &Output) -> Result<()> {
    let stats = store.storage_stats();
    let config = store.config();
    let doc = store.document();

    let categories: usize = doc.collections.iter().map(|c| c.categories.len()).sum();
    let bookmarks: usize = doc.collections.iter().map(|c| c.bookmark_count()).sum();
    let active = doc
        .active_collection()
        .map(|c| c.title.clone())
        .unwrap_or_default();

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "active_collection": active,
                    "storage": {
                        "path": config.document_path(),
                        "document_exists": stats.document_exists,
                        "document_size": stats.document_size,
                        "backup_exists": stats.backup_exists
                    },
                    "counts": {
                        "collections": doc.collections.len(),
                        "categories": categories,
                        "bookmarks": bookmarks
                    }
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.document_path().display());
        }
        OutputFormat::Human => {
            println!("Zentab Status");
            println!("=============");
            println!();
            println!("Storage:");
            println!("  Location: {}", config.document_path().display());
            if stats.document_exists {
                println!("  Size:     {}", stats.document_size_human());
            } else {
                println!("  Size:     (not saved yet)");
            }
            if stats.backup_exists {
                println!("  A rejected document was set aside next to it (.corrupt.backup)");
            }
            println!();
            println!("Contents:");
            println!("  Active:      {}", active);
            println!("  Collections: {}", doc.collections.len());
            println!("  Categories:  {}", categories);
            println!("  Bookmarks:   {}", bookmarks);
        }
    }

    Ok(())
}
