//! Category command handlers
//!
//! All operate on the active collection.

use anyhow::{bail, Context, Result};

use zentab_core::Store;

use crate::output::Output;
use crate::prompt::confirm;
use crate::resolve;

/// List categories with their positions
pub fn list(store: &Store, output: &Output) -> Result<()> {
    output.print_categories(store.document().active_categories());
    Ok(())
}

const NEW_CATEGORY_TITLE: &str = "New Category";

/// Add a category
pub fn add(store: &mut Store, title: Option<String>, output: &Output) -> Result<()> {
    resolve::editable(store.document())?;
    let id = store
        .add_category(title.as_deref().unwrap_or(NEW_CATEGORY_TITLE))
        .context("Failed to add category")?;
    output.created("category", &id);
    Ok(())
}

/// Delete a category and its bookmarks
pub fn delete(store: &mut Store, id: String, output: &Output) -> Result<()> {
    let doc = store.document();
    resolve::editable(doc)?;
    let id = resolve::category(doc, &id)?;
    let Some(category) = doc.find_category(&id) else {
        bail!("No category found matching: {}", id);
    };
    let title = category.title.clone();

    if output.should_prompt() && !category.bookmarks.is_empty() {
        println!(
            "Delete category '{}' and its {} bookmark(s)?",
            title,
            category.bookmarks.len()
        );
        if !confirm("Are you sure?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store
        .delete_category(&id)
        .context("Failed to delete category")?;
    output.success(&format!("Deleted category: {}", title));
    Ok(())
}

/// Rename a category
pub fn rename(store: &mut Store, id: String, title: String, output: &Output) -> Result<()> {
    resolve::editable(store.document())?;
    let id = resolve::category(store.document(), &id)?;
    store
        .update_category(&id, &title)
        .context("Failed to rename category")?;
    output.success(&format!("Renamed category to: {}", title));
    Ok(())
}

/// Move a category from one position to another
pub fn reorder(store: &mut Store, from: usize, to: usize, output: &Output) -> Result<()> {
    resolve::editable(store.document())?;
    let len = store.document().active_categories().len();
    if from >= len {
        bail!(
            "Position {} is out of range; the collection has {} categories",
            from,
            len
        );
    }

    store
        .reorder_categories(from, to)
        .context("Failed to reorder categories")?;
    output.success(&format!("Moved category from {} to {}", from, to.min(len - 1)));
    Ok(())
}
