//! Resolve user-typed references to entity ids
//!
//! Accepts a full id, a unique id prefix, or an exact (case-insensitive)
//! title.

use anyhow::{bail, Result};

use zentab_core::{Category, Document};

/// Resolve `input` against `(id, title)` candidates
pub fn resolve<'a, I>(kind: &str, input: &str, candidates: I) -> Result<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let candidates: Vec<(&str, &str)> = candidates.into_iter().collect();

    if let Some((id, _)) = candidates.iter().find(|(id, _)| *id == input) {
        return Ok(id.to_string());
    }

    let mut matches: Vec<(&str, &str)> = candidates
        .iter()
        .copied()
        .filter(|(id, _)| id.starts_with(input))
        .collect();
    if matches.is_empty() {
        matches = candidates
            .iter()
            .copied()
            .filter(|(_, title)| title.eq_ignore_ascii_case(input))
            .collect();
    }

    match matches.len() {
        0 => bail!("No {} found matching: {}", kind, input),
        1 => Ok(matches[0].0.to_string()),
        _ => {
            eprintln!("Multiple {}s match '{}':", kind, input);
            for (id, title) in &matches {
                eprintln!("  {} - {}", id, title);
            }
            bail!("Ambiguous {}. Please provide more characters of the id.", kind);
        }
    }
}

/// Resolve a collection of the document
pub fn collection(doc: &Document, input: &str) -> Result<String> {
    resolve(
        "collection",
        input,
        doc.collections
            .iter()
            .map(|c| (c.id.as_str(), c.title.as_str())),
    )
}

/// Fail unless the active collection id names an existing collection
///
/// A stale id still shows the first collection, but edits through it are
/// ignored by the document.
pub fn editable(doc: &Document) -> Result<()> {
    if doc.collection(&doc.active_collection_id).is_none() {
        bail!(
            "The active collection no longer exists. \
             Pick one with `zentab collection use <id>` first."
        );
    }
    Ok(())
}

/// Resolve a category of the active collection
pub fn category(doc: &Document, input: &str) -> Result<String> {
    resolve(
        "category",
        input,
        doc.active_categories()
            .iter()
            .map(|c| (c.id.as_str(), c.title.as_str())),
    )
}

/// Resolve a bookmark within one category
pub fn bookmark(category: &Category, input: &str) -> Result<String> {
    resolve(
        "bookmark",
        input,
        category
            .bookmarks
            .iter()
            .map(|b| (b.id.as_str(), b.title.as_str())),
    )
}

/// Resolve a bookmark anywhere in the active collection
///
/// Returns `(category_id, bookmark_id)`.
pub fn any_bookmark(doc: &Document, input: &str) -> Result<(String, String)> {
    let candidates = doc
        .active_categories()
        .iter()
        .flat_map(|c| c.bookmarks.iter().map(|b| (b.id.as_str(), b.title.as_str())));
    let bookmark_id = resolve("bookmark", input, candidates)?;

    match doc.locate_bookmark(&bookmark_id) {
        Some((category, _)) => Ok((category.id.clone(), bookmark_id)),
        None => bail!("No bookmark found matching: {}", input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANDIDATES: &[(&str, &str)] = &[
        ("default", "General"),
        ("4f2a9c1e-aaaa", "News"),
        ("4f2b0000-bbbb", "Tools"),
    ];

    fn candidates() -> impl Iterator<Item = (&'static str, &'static str)> {
        CANDIDATES.iter().copied()
    }

    #[test]
    fn test_exact_id() {
        assert_eq!(resolve("category", "default", candidates()).unwrap(), "default");
    }

    #[test]
    fn test_unique_prefix() {
        assert_eq!(
            resolve("category", "4f2a", candidates()).unwrap(),
            "4f2a9c1e-aaaa"
        );
    }

    #[test]
    fn test_ambiguous_prefix() {
        assert!(resolve("category", "4f2", candidates()).is_err());
    }

    #[test]
    fn test_title_match() {
        assert_eq!(
            resolve("category", "tools", candidates()).unwrap(),
            "4f2b0000-bbbb"
        );
    }

    #[test]
    fn test_no_match() {
        let err = resolve("category", "zzz", candidates()).unwrap_err();
        assert!(err.to_string().contains("No category found"));
    }

    #[test]
    fn test_editable_requires_existing_active_collection() {
        let doc = Document::default();
        assert!(editable(&doc).is_ok());

        let stale = doc.add_collection("Work").set_active_collection("gone");
        let err = editable(&stale).unwrap_err();
        assert!(err.to_string().contains("no longer exists"));
    }

    #[test]
    fn test_any_bookmark() {
        let (doc, other) = Document::default().add_category_with_id("Other");
        let (doc, id) = doc.add_bookmark_with_id(&other, "Rust", "https://rust-lang.org", None);

        let (category, bookmark) = any_bookmark(&doc, "rust").unwrap();
        assert_eq!(category, other);
        assert_eq!(bookmark, id);
    }
}
