//! Collection command handlers

use anyhow::{Context, Result};

use zentab_core::Store;

use crate::output::Output;
use crate::prompt::confirm;
use crate::resolve;

/// Show the active collection
pub fn show(store: &Store, output: &Output) -> Result<()> {
    output.print_document(store.document());
    Ok(())
}

/// List all collections
pub fn list(store: &Store, output: &Output) -> Result<()> {
    output.print_collections(store.document());
    Ok(())
}

/// Create a collection and switch to it
pub fn add(store: &mut Store, title: String, output: &Output) -> Result<()> {
    let id = store
        .add_collection(&title)
        .context("Failed to add collection")?;
    output.created("collection", &id);
    Ok(())
}

/// Remove a collection
pub fn remove(store: &mut Store, id: String, output: &Output) -> Result<()> {
    let doc = store.document();
    let id = resolve::collection(doc, &id)?;

    if doc.collections.len() <= 1 {
        output.message("Cannot remove the last collection.");
        return Ok(());
    }

    let title = doc
        .collection(&id)
        .map(|c| c.title.clone())
        .unwrap_or_default();
    if output.should_prompt() {
        println!("Remove collection '{}' and everything in it?", title);
        if !confirm("Are you sure?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store
        .remove_collection(&id)
        .context("Failed to remove collection")?;
    output.success(&format!("Removed collection: {}", title));
    Ok(())
}

/// Rename a collection
pub fn rename(store: &mut Store, id: String, title: String, output: &Output) -> Result<()> {
    let id = resolve::collection(store.document(), &id)?;
    store
        .rename_collection(&id, &title)
        .context("Failed to rename collection")?;
    output.success(&format!("Renamed collection to: {}", title));
    Ok(())
}

/// Switch the active collection
pub fn switch(store: &mut Store, id: String, output: &Output) -> Result<()> {
    let id = resolve::collection(store.document(), &id)?;
    store
        .set_active_collection(&id)
        .context("Failed to switch collection")?;

    let title = store
        .document()
        .active_collection()
        .map(|c| c.title.clone())
        .unwrap_or_default();
    output.success(&format!("Active collection: {}", title));
    Ok(())
}
