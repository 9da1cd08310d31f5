//! Export and import command handlers

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Local;

use zentab_core::{ImportError, Store};

use crate::output::Output;

/// Write a backup of the whole document
///
/// `output_path` may be a file or a directory; without it the backup is
/// written to the configured backup directory.
pub fn export(store: &Store, output_path: Option<PathBuf>, output: &Output) -> Result<()> {
    let export = store.export(Local::now().date_naive())?;

    let path = match output_path {
        Some(p) if p.is_dir() => p.join(&export.file_name),
        Some(p) => p,
        None => store.config().export_dir().join(&export.file_name),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }
    }
    fs::write(&path, &export.bytes)
        .with_context(|| format!("Failed to write backup to {:?}", path))?;

    output.success(&format!("Exported to {}", path.display()));
    Ok(())
}

/// Replace the document with a backup file
///
/// A rejected file leaves the current document untouched.
pub fn import(store: &mut Store, file: PathBuf, output: &Output) -> Result<()> {
    let bytes = fs::read(&file).with_context(|| format!("Failed to read {:?}", file))?;

    if let Err(e) = store.import(&bytes) {
        match e.downcast_ref::<ImportError>() {
            Some(reason) => bail!("Import failed: {}", reason),
            None => return Err(e.context("Failed to save imported document")),
        }
    }

    let doc = store.document();
    let bookmarks: usize = doc.collections.iter().map(|c| c.bookmark_count()).sum();
    output.success(&format!(
        "Imported {} collection(s) with {} bookmark(s)",
        doc.collections.len(),
        bookmarks
    ));
    Ok(())
}
