//! Bookmark command handlers
//!
//! All operate on the active collection. URLs typed by the user are
//! normalized before they reach the store.

use anyhow::{bail, Context, Result};

use zentab_core::{normalize_url, BookmarkPatch, Store};

use crate::output::Output;
use crate::prompt::confirm;
use crate::resolve;

/// List bookmarks of one category, or of every category
pub fn list(store: &Store, category: Option<String>, output: &Output) -> Result<()> {
    let doc = store.document();
    match category {
        Some(ref c) => {
            let id = resolve::category(doc, c)?;
            let bookmarks = doc
                .find_category(&id)
                .map(|c| c.bookmarks.clone())
                .unwrap_or_default();
            output.print_bookmarks(&bookmarks);
        }
        None => {
            let bookmarks: Vec<_> = doc
                .active_categories()
                .iter()
                .flat_map(|c| c.bookmarks.iter().cloned())
                .collect();
            output.print_bookmarks(&bookmarks);
        }
    }
    Ok(())
}

/// Show a single bookmark
pub fn show(store: &Store, id: String, output: &Output) -> Result<()> {
    let doc = store.document();
    let (category_id, bookmark_id) = resolve::any_bookmark(doc, &id)?;
    match doc.find_bookmark(&category_id, &bookmark_id) {
        Some(bookmark) => output.print_bookmark(bookmark),
        None => bail!("Bookmark not found: {}", id),
    }
    Ok(())
}

/// Add a bookmark to a category
pub fn add(
    store: &mut Store,
    category: String,
    title: String,
    url: String,
    icon: Option<String>,
    output: &Output,
) -> Result<()> {
    if title.trim().is_empty() || url.trim().is_empty() {
        bail!("Both a title and a URL are required");
    }

    resolve::editable(store.document())?;
    let category_id = resolve::category(store.document(), &category)?;
    let url = normalize_url(&url);
    let icon = icon.filter(|i| !i.trim().is_empty());

    let id = store
        .add_bookmark(&category_id, &title, &url, icon)
        .context("Failed to add bookmark")?;

    output.created("bookmark", &id);
    if let Some(bookmark) = store.document().find_bookmark(&category_id, &id) {
        if !output.is_quiet() && !output.is_json() {
            output.print_bookmark(bookmark);
        }
    }
    Ok(())
}

/// Delete a bookmark
pub fn delete(store: &mut Store, category: String, id: String, output: &Output) -> Result<()> {
    let doc = store.document();
    resolve::editable(doc)?;
    let category_id = resolve::category(doc, &category)?;
    let Some(category) = doc.find_category(&category_id) else {
        bail!("No category found matching: {}", category);
    };
    let bookmark_id = resolve::bookmark(category, &id)?;
    let title = category
        .bookmark(&bookmark_id)
        .map(|b| b.title.clone())
        .unwrap_or_default();

    if output.should_prompt() {
        println!("Delete bookmark: {}", title);
        if !confirm("Are you sure?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store
        .delete_bookmark(&category_id, &bookmark_id)
        .context("Failed to delete bookmark")?;
    output.success(&format!("Deleted bookmark: {}", title));
    Ok(())
}

/// Fields for `bookmark edit`
pub struct EditArgs {
    pub title: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub clear_icon: bool,
}

impl EditArgs {
    fn into_patch(self) -> BookmarkPatch {
        let icon = if self.clear_icon {
            Some(None)
        } else {
            self.icon.map(Some)
        };
        BookmarkPatch {
            title: self.title,
            url: self.url.map(|u| normalize_url(&u)),
            icon,
        }
    }
}

/// Edit fields of a bookmark
pub fn edit(
    store: &mut Store,
    category: String,
    id: String,
    args: EditArgs,
    output: &Output,
) -> Result<()> {
    let doc = store.document();
    resolve::editable(doc)?;
    let category_id = resolve::category(doc, &category)?;
    let Some(category) = doc.find_category(&category_id) else {
        bail!("No category found matching: {}", category);
    };
    let bookmark_id = resolve::bookmark(category, &id)?;

    let patch = args.into_patch();
    if patch.is_empty() {
        output.message("Nothing to change. Use --title, --url, --icon or --clear-icon.");
        return Ok(());
    }

    store
        .update_bookmark(&category_id, &bookmark_id, &patch)
        .context("Failed to update bookmark")?;

    output.success("Bookmark updated");
    if let Some(bookmark) = store.document().find_bookmark(&category_id, &bookmark_id) {
        output.print_bookmark(bookmark);
    }
    Ok(())
}

/// Move a bookmark to a position in a category
///
/// The position counts bookmarks in the target category without the one
/// being moved.
pub fn move_to(
    store: &mut Store,
    id: String,
    target: String,
    index: Option<usize>,
    output: &Output,
) -> Result<()> {
    let doc = store.document();
    resolve::editable(doc)?;
    let (source_id, bookmark_id) = resolve::any_bookmark(doc, &id)?;
    let target_id = resolve::category(doc, &target)?;

    let index = match index {
        Some(i) => i,
        None => {
            let len = doc
                .find_category(&target_id)
                .map(|c| c.bookmarks.len())
                .unwrap_or(0);
            if source_id == target_id {
                len.saturating_sub(1)
            } else {
                len
            }
        }
    };

    store
        .move_bookmark(&bookmark_id, &source_id, &target_id, index)
        .context("Failed to move bookmark")?;
    output.success("Bookmark moved");
    Ok(())
}

/// Open a bookmark in the default browser
pub fn open(store: &Store, id: String, output: &Output) -> Result<()> {
    let doc = store.document();
    let (category_id, bookmark_id) = resolve::any_bookmark(doc, &id)?;
    let Some(bookmark) = doc.find_bookmark(&category_id, &bookmark_id) else {
        bail!("Bookmark not found: {}", id);
    };

    open::that(&bookmark.url).with_context(|| format!("Failed to open {}", bookmark.url))?;
    output.message(&format!("Opened {}", bookmark.url));
    Ok(())
}
