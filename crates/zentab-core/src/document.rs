//! The Zentab document and its mutation API
//!
//! A [`Document`] is the whole persisted unit: collections, the active
//! collection id and settings. Every mutation takes `&self` and returns a
//! new snapshot; the input is never modified. Category and bookmark
//! mutations address the active collection only.
//!
//! Mutations that reference an id that does not exist return an unchanged
//! copy rather than an error.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::{
    Bookmark, BookmarkPatch, Category, Collection, DEFAULT_CATEGORY_ID, DEFAULT_CATEGORY_TITLE,
    DEFAULT_COLLECTION_ID, DEFAULT_COLLECTION_TITLE,
};
use crate::settings::{Settings, SettingsPatch};

/// Structural invariant violations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Document has no collections")]
    NoCollections,

    #[error("Duplicate collection id: {0}")]
    DuplicateCollection(String),

    #[error("Duplicate category id '{category}' in collection '{collection}'")]
    DuplicateCategory {
        collection: String,
        category: String,
    },

    #[error("Duplicate bookmark id '{bookmark}' in category '{category}'")]
    DuplicateBookmark { category: String, bookmark: String },
}

/// The persisted start page state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Collections in tab order
    pub collections: Vec<Collection>,
    /// Id of the collection being displayed and edited
    #[serde(default)]
    pub active_collection_id: String,
    #[serde(default)]
    pub settings: Settings,
}

impl Default for Document {
    fn default() -> Self {
        let mut collection = Collection::with_id(DEFAULT_COLLECTION_ID, DEFAULT_COLLECTION_TITLE);
        collection
            .categories
            .push(Category::with_id(DEFAULT_CATEGORY_ID, DEFAULT_CATEGORY_TITLE));

        Self {
            collections: vec![collection],
            active_collection_id: DEFAULT_COLLECTION_ID.to_string(),
            settings: Settings::default(),
        }
    }
}

impl Document {
    // ==================== Reads ====================

    /// Index of the active collection
    ///
    /// Falls back to the first collection when the active id is stale.
    fn active_index(&self) -> Option<usize> {
        if self.collections.is_empty() {
            return None;
        }
        Some(
            self.collections
                .iter()
                .position(|c| c.id == self.active_collection_id)
                .unwrap_or(0),
        )
    }

    /// The active collection, or the first one if the active id is stale
    pub fn active_collection(&self) -> Option<&Collection> {
        self.active_index().map(|i| &self.collections[i])
    }

    /// Categories of the active collection
    pub fn active_categories(&self) -> &[Category] {
        self.active_collection()
            .map(|c| c.categories.as_slice())
            .unwrap_or(&[])
    }

    /// Get a collection by id
    pub fn collection(&self, id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    /// Get a category of the active collection by id
    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.active_categories().iter().find(|c| c.id == id)
    }

    /// Get a bookmark of the active collection
    pub fn find_bookmark(&self, category_id: &str, bookmark_id: &str) -> Option<&Bookmark> {
        self.find_category(category_id)?.bookmark(bookmark_id)
    }

    /// Find which category of the active collection holds a bookmark
    pub fn locate_bookmark(&self, bookmark_id: &str) -> Option<(&Category, &Bookmark)> {
        self.active_categories()
            .iter()
            .find_map(|c| c.bookmark(bookmark_id).map(|b| (c, b)))
    }

    /// Check structural invariants: at least one collection and unique ids
    /// within each scope
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.collections.is_empty() {
            return Err(ValidationError::NoCollections);
        }

        let mut collection_ids = HashSet::new();
        for collection in &self.collections {
            if !collection_ids.insert(collection.id.as_str()) {
                return Err(ValidationError::DuplicateCollection(collection.id.clone()));
            }

            let mut category_ids = HashSet::new();
            for category in &collection.categories {
                if !category_ids.insert(category.id.as_str()) {
                    return Err(ValidationError::DuplicateCategory {
                        collection: collection.id.clone(),
                        category: category.id.clone(),
                    });
                }

                let mut bookmark_ids = HashSet::new();
                for bookmark in &category.bookmarks {
                    if !bookmark_ids.insert(bookmark.id.as_str()) {
                        return Err(ValidationError::DuplicateBookmark {
                            category: category.id.clone(),
                            bookmark: bookmark.id.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    // ==================== Collections ====================

    /// Append a new empty collection and make it active
    pub fn add_collection(&self, title: impl Into<String>) -> Document {
        self.add_collection_with_id(title).0
    }

    /// Like [`add_collection`](Self::add_collection), also returning the new id
    pub fn add_collection_with_id(&self, title: impl Into<String>) -> (Document, String) {
        let collection = Collection::new(title);
        let id = collection.id.clone();
        let mut next = self.clone();
        next.collections.push(collection);
        next.active_collection_id = id.clone();
        (next, id)
    }

    /// Remove a collection
    ///
    /// The last remaining collection cannot be removed. If the active
    /// collection is removed, the first remaining one becomes active.
    pub fn remove_collection(&self, id: &str) -> Document {
        let mut next = self.clone();
        if next.collections.len() <= 1 {
            return next;
        }

        next.collections.retain(|c| c.id != id);
        if id == next.active_collection_id {
            if let Some(first) = next.collections.first() {
                next.active_collection_id = first.id.clone();
            }
        }
        next
    }

    /// Rename a collection
    pub fn rename_collection(&self, id: &str, title: impl Into<String>) -> Document {
        let mut next = self.clone();
        if let Some(collection) = next.collections.iter_mut().find(|c| c.id == id) {
            collection.title = title.into();
        }
        next
    }

    /// Switch the active collection
    ///
    /// The id is not validated; reads fall back to the first collection.
    pub fn set_active_collection(&self, id: impl Into<String>) -> Document {
        let mut next = self.clone();
        next.active_collection_id = id.into();
        next
    }

    // ==================== Categories ====================

    /// Append a new empty category to the active collection
    pub fn add_category(&self, title: impl Into<String>) -> Document {
        self.add_category_with_id(title).0
    }

    /// Like [`add_category`](Self::add_category), also returning the new id
    pub fn add_category_with_id(&self, title: impl Into<String>) -> (Document, String) {
        let category = Category::new(title);
        let id = category.id.clone();
        let next = self.with_active(|collection| collection.categories.push(category));
        (next, id)
    }

    /// Remove a category and all of its bookmarks
    pub fn delete_category(&self, id: &str) -> Document {
        self.with_active(|collection| collection.categories.retain(|c| c.id != id))
    }

    /// Rename a category
    pub fn update_category(&self, id: &str, title: impl Into<String>) -> Document {
        let title = title.into();
        self.with_category(id, |category| category.title = title)
    }

    /// Move the category at `start` to `end`
    ///
    /// `end` is an index into the list after removal and is clamped to its
    /// length. A `start` outside the list leaves the document unchanged.
    pub fn reorder_categories(&self, start: usize, end: usize) -> Document {
        self.with_active(|collection| reorder(&mut collection.categories, start, end))
    }

    // ==================== Bookmarks ====================

    /// Append a bookmark to a category of the active collection
    pub fn add_bookmark(
        &self,
        category_id: &str,
        title: impl Into<String>,
        url: impl Into<String>,
        icon: Option<String>,
    ) -> Document {
        self.add_bookmark_with_id(category_id, title, url, icon).0
    }

    /// Like [`add_bookmark`](Self::add_bookmark), also returning the new id
    ///
    /// The id is returned even when the category does not exist, in which
    /// case nothing was added.
    pub fn add_bookmark_with_id(
        &self,
        category_id: &str,
        title: impl Into<String>,
        url: impl Into<String>,
        icon: Option<String>,
    ) -> (Document, String) {
        let bookmark = Bookmark::new(title, url, icon);
        let id = bookmark.id.clone();
        let next = self.with_category(category_id, |category| category.bookmarks.push(bookmark));
        (next, id)
    }

    /// Remove a bookmark
    pub fn delete_bookmark(&self, category_id: &str, bookmark_id: &str) -> Document {
        self.with_category(category_id, |category| {
            category.bookmarks.retain(|b| b.id != bookmark_id)
        })
    }

    /// Merge the given fields into a bookmark
    pub fn update_bookmark(
        &self,
        category_id: &str,
        bookmark_id: &str,
        patch: &BookmarkPatch,
    ) -> Document {
        self.with_category(category_id, |category| {
            if let Some(bookmark) = category.bookmarks.iter_mut().find(|b| b.id == bookmark_id) {
                bookmark.apply(patch);
            }
        })
    }

    /// Move a bookmark between (or within) categories of the active collection
    ///
    /// `new_index` is always relative to the target list after the bookmark
    /// has been removed from its source, and is clamped to that list's
    /// length. Moving within one category is a reorder.
    pub fn move_bookmark(
        &self,
        bookmark_id: &str,
        source_category_id: &str,
        target_category_id: &str,
        new_index: usize,
    ) -> Document {
        self.with_active(|collection| {
            let categories = &mut collection.categories;
            let Some(source) = categories.iter().position(|c| c.id == source_category_id) else {
                return;
            };
            let Some(target) = categories.iter().position(|c| c.id == target_category_id) else {
                return;
            };
            let Some(from) = categories[source].position(bookmark_id) else {
                return;
            };

            let bookmark = categories[source].bookmarks.remove(from);
            let bookmarks = &mut categories[target].bookmarks;
            let index = new_index.min(bookmarks.len());
            bookmarks.insert(index, bookmark);
        })
    }

    // ==================== Settings ====================

    /// Shallow-merge a settings patch
    pub fn update_settings(&self, patch: &SettingsPatch) -> Document {
        let mut next = self.clone();
        next.settings.merge(patch);
        next
    }

    /// Replace one extension's settings blob, keeping the others
    pub fn set_extension_settings(&self, extension_id: &str, value: Value) -> Document {
        let mut next = self.clone();
        next.settings.set_extension_settings(extension_id, value);
        next
    }

    // ==================== Helpers ====================

    /// Copy the document and apply `f` to the active collection
    ///
    /// Only an exact id match counts; with a stale active id the copy is
    /// returned unchanged.
    fn with_active<F>(&self, f: F) -> Document
    where
        F: FnOnce(&mut Collection),
    {
        let mut next = self.clone();
        if let Some(collection) = next
            .collections
            .iter_mut()
            .find(|c| c.id == self.active_collection_id)
        {
            f(collection);
        }
        next
    }

    /// Copy the document and apply `f` to a category of the active collection
    fn with_category<F>(&self, category_id: &str, f: F) -> Document
    where
        F: FnOnce(&mut Category),
    {
        self.with_active(|collection| {
            if let Some(category) = collection
                .categories
                .iter_mut()
                .find(|c| c.id == category_id)
            {
                f(category);
            }
        })
    }
}

/// Remove the element at `start` and reinsert it at `end`
fn reorder<T>(items: &mut Vec<T>, start: usize, end: usize) {
    if start >= items.len() {
        return;
    }
    let item = items.remove(start);
    let end = end.min(items.len());
    items.insert(end, item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn titles(categories: &[Category]) -> Vec<&str> {
        categories.iter().map(|c| c.title.as_str()).collect()
    }

    fn doc_with_categories(names: &[&str]) -> Document {
        names
            .iter()
            .fold(Document::default(), |doc, name| doc.add_category(*name))
    }

    #[test]
    fn test_default_document() {
        let doc = Document::default();
        assert_eq!(doc.collections.len(), 1);
        assert_eq!(doc.active_collection_id, DEFAULT_COLLECTION_ID);

        let active = doc.active_collection().unwrap();
        assert_eq!(active.title, "My Bookmarks");
        assert_eq!(active.categories.len(), 1);
        assert_eq!(active.categories[0].id, "default");
        assert_eq!(active.categories[0].title, "General");
        assert!(active.categories[0].bookmarks.is_empty());
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_add_bookmark_to_default_category() {
        let doc = Document::default();
        let next = doc.add_bookmark("default", "Example", "https://example.com", None);

        let categories = next.active_categories();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].bookmarks.len(), 1);

        let bookmark = &categories[0].bookmarks[0];
        assert_eq!(bookmark.title, "Example");
        assert_eq!(bookmark.url, "https://example.com");
        assert!(!bookmark.id.is_empty());

        // Input untouched
        assert!(doc.active_categories()[0].bookmarks.is_empty());
    }

    #[test]
    fn test_add_bookmark_unknown_category_is_noop() {
        let doc = Document::default();
        let next = doc.add_bookmark("missing", "Example", "https://example.com", None);
        assert_eq!(next, doc);
    }

    #[test]
    fn test_add_collection_becomes_active() {
        let doc = Document::default();
        let (next, id) = doc.add_collection_with_id("Work");

        assert_eq!(next.collections.len(), 2);
        assert_eq!(next.active_collection_id, id);
        assert_eq!(next.active_collection().unwrap().title, "Work");
        assert!(next.active_categories().is_empty());

        // Original collection untouched
        assert_eq!(next.collections[0], doc.collections[0]);
    }

    #[test]
    fn test_remove_last_collection_is_noop() {
        let doc = Document::default();
        assert_eq!(doc.remove_collection(DEFAULT_COLLECTION_ID), doc);
        assert_eq!(doc.remove_collection("anything"), doc);
    }

    #[test]
    fn test_remove_active_collection_switches_to_first() {
        let (doc, work) = Document::default().add_collection_with_id("Work");
        let (doc, home) = doc.add_collection_with_id("Home");
        assert_eq!(doc.active_collection_id, home);

        let next = doc.remove_collection(&home);
        assert_eq!(next.collections.len(), 2);
        assert_eq!(next.active_collection_id, DEFAULT_COLLECTION_ID);

        let next = doc.set_active_collection(&work).remove_collection(DEFAULT_COLLECTION_ID);
        assert_eq!(next.active_collection_id, work);
        assert_eq!(next.collections[0].id, work);
    }

    #[test]
    fn test_rename_collection() {
        let doc = Document::default();
        let next = doc.rename_collection(DEFAULT_COLLECTION_ID, "Personal");
        assert_eq!(next.collections[0].title, "Personal");
        assert_eq!(doc.rename_collection("missing", "X"), doc);
    }

    #[test]
    fn test_stale_active_id_is_read_only_fallback() {
        let doc = Document::default()
            .add_collection("Work")
            .set_active_collection("gone");
        assert_eq!(doc.active_collection_id, "gone");
        assert_eq!(doc.active_collection().unwrap().id, DEFAULT_COLLECTION_ID);

        // The fallback is a view only; nothing is edited through it
        assert_eq!(doc.add_category("X"), doc);
        assert_eq!(doc.delete_category(DEFAULT_CATEGORY_ID), doc);
        assert_eq!(doc.reorder_categories(0, 1), doc);
        assert_eq!(doc.add_bookmark(DEFAULT_CATEGORY_ID, "Rust", "https://rust-lang.org", None), doc);
    }

    #[test]
    fn test_category_mutations_only_touch_active_collection() {
        let doc = Document::default().add_collection("Work").add_category("Tools");
        assert!(doc.collections[0].category("default").is_some());
        assert_eq!(doc.collections[0].categories.len(), 1);
        assert_eq!(titles(&doc.collections[1].categories), vec!["Tools"]);

        // "default" lives in the inactive collection
        let next = doc.delete_category("default");
        assert_eq!(next, doc);
    }

    #[test]
    fn test_update_and_delete_category() {
        let (doc, id) = Document::default().add_category_with_id("News");
        let doc = doc
            .add_bookmark(&id, "HN", "https://news.ycombinator.com", None)
            .update_category(&id, "Daily News");
        assert_eq!(doc.find_category(&id).unwrap().title, "Daily News");

        let next = doc.delete_category(&id);
        assert!(next.find_category(&id).is_none());
        assert_eq!(titles(next.active_categories()), vec!["General"]);
    }

    #[test]
    fn test_reorder_categories() {
        let doc = doc_with_categories(&["A", "B", "C"]);
        assert_eq!(titles(doc.active_categories()), vec!["General", "A", "B", "C"]);

        let next = doc.reorder_categories(0, 2);
        assert_eq!(titles(next.active_categories()), vec!["A", "B", "General", "C"]);

        let next = doc.reorder_categories(3, 0);
        assert_eq!(titles(next.active_categories()), vec!["C", "General", "A", "B"]);
    }

    #[test]
    fn test_reorder_inverse_law() {
        let doc = doc_with_categories(&["A", "B", "C", "D"]);
        let len = doc.active_categories().len();
        for i in 0..len {
            for j in 0..len {
                if i == j {
                    continue;
                }
                let round_trip = doc.reorder_categories(i, j).reorder_categories(j, i);
                assert_eq!(round_trip, doc, "reorder({}, {}) not inverted", i, j);
            }
        }
    }

    #[test]
    fn test_reorder_out_of_range() {
        let doc = doc_with_categories(&["A", "B"]);
        assert_eq!(doc.reorder_categories(10, 0), doc);

        let next = doc.reorder_categories(0, 99);
        assert_eq!(titles(next.active_categories()), vec!["A", "B", "General"]);
    }

    #[test]
    fn test_update_bookmark_merges_fields() {
        let (doc, bm) =
            Document::default().add_bookmark_with_id("default", "Rust", "https://rust-lang.org", None);
        let next = doc.update_bookmark(
            "default",
            &bm,
            &BookmarkPatch::default().title("The Rust Language"),
        );
        let bookmark = next.find_bookmark("default", &bm).unwrap();
        assert_eq!(bookmark.title, "The Rust Language");
        assert_eq!(bookmark.url, "https://rust-lang.org");
        assert_eq!(bookmark.id, bm);
    }

    #[test]
    fn test_update_bookmark_empty_patch() {
        let (doc, bm) = Document::default().add_bookmark_with_id(
            "default",
            "Rust",
            "https://rust-lang.org",
            Some("crab".to_string()),
        );
        let next = doc.update_bookmark("default", &bm, &BookmarkPatch::default());
        assert_eq!(next, doc);
    }

    #[test]
    fn test_delete_bookmark() {
        let (doc, a) = Document::default().add_bookmark_with_id("default", "A", "https://a.io", None);
        let (doc, b) = doc.add_bookmark_with_id("default", "B", "https://b.io", None);
        let next = doc.delete_bookmark("default", &a);
        let remaining: Vec<_> = next.active_categories()[0]
            .bookmarks
            .iter()
            .map(|b| b.id.clone())
            .collect();
        assert_eq!(remaining, vec![b]);
        assert_eq!(next.delete_bookmark("default", "missing"), next);
    }

    fn bookmark_titles(doc: &Document, category_id: &str) -> Vec<String> {
        doc.find_category(category_id)
            .unwrap()
            .bookmarks
            .iter()
            .map(|b| b.title.clone())
            .collect()
    }

    #[test]
    fn test_move_bookmark_across_categories() {
        let (doc, other) = Document::default().add_category_with_id("Other");
        let (doc, a) = doc.add_bookmark_with_id("default", "A", "https://a.io", None);
        let doc = doc
            .add_bookmark("default", "B", "https://b.io", None)
            .add_bookmark(&other, "X", "https://x.io", None)
            .add_bookmark(&other, "Y", "https://y.io", None);

        let next = doc.move_bookmark(&a, "default", &other, 1);
        assert_eq!(bookmark_titles(&next, "default"), vec!["B"]);
        assert_eq!(bookmark_titles(&next, &other), vec!["X", "A", "Y"]);

        // Index past the end appends
        let next = doc.move_bookmark(&a, "default", &other, 50);
        assert_eq!(bookmark_titles(&next, &other), vec!["X", "Y", "A"]);
    }

    #[test]
    fn test_move_bookmark_within_category_uses_post_removal_index() {
        let (doc, a) = Document::default().add_bookmark_with_id("default", "A", "https://a.io", None);
        let doc = doc
            .add_bookmark("default", "B", "https://b.io", None)
            .add_bookmark("default", "C", "https://c.io", None);

        // After removing A the list is [B, C]; index 2 is the end
        let next = doc.move_bookmark(&a, "default", "default", 2);
        assert_eq!(bookmark_titles(&next, "default"), vec!["B", "C", "A"]);

        let next = doc.move_bookmark(&a, "default", "default", 1);
        assert_eq!(bookmark_titles(&next, "default"), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_move_bookmark_missing_ids_is_noop() {
        let (doc, a) = Document::default().add_bookmark_with_id("default", "A", "https://a.io", None);
        assert_eq!(doc.move_bookmark("missing", "default", "default", 0), doc);
        assert_eq!(doc.move_bookmark(&a, "missing", "default", 0), doc);
        assert_eq!(doc.move_bookmark(&a, "default", "missing", 0), doc);
        assert_eq!(doc.move_bookmark(&a, "default", "default", 0), doc);
    }

    #[test]
    fn test_locate_bookmark() {
        let (doc, other) = Document::default().add_category_with_id("Other");
        let (doc, x) = doc.add_bookmark_with_id(&other, "X", "https://x.io", None);
        let (category, bookmark) = doc.locate_bookmark(&x).unwrap();
        assert_eq!(category.id, other);
        assert_eq!(bookmark.title, "X");
        assert!(doc.locate_bookmark("missing").is_none());
    }

    #[test]
    fn test_ids_unique_across_operation_sequence() {
        let mut doc = Document::default();
        let mut seen = HashSet::new();
        for round in 0..5 {
            let (next, collection) = doc.add_collection_with_id(format!("C{}", round));
            assert!(seen.insert(collection));
            doc = next;
            for c in 0..3 {
                let (next, category) = doc.add_category_with_id(format!("Cat{}", c));
                assert!(seen.insert(category.clone()));
                doc = next;
                for b in 0..3 {
                    let (next, bookmark) =
                        doc.add_bookmark_with_id(&category, format!("B{}", b), "https://x.io", None);
                    assert!(seen.insert(bookmark.clone()));
                    doc = next.delete_bookmark(&category, &bookmark);
                    let (next, bookmark) =
                        doc.add_bookmark_with_id(&category, format!("B{}", b), "https://x.io", None);
                    assert!(seen.insert(bookmark));
                    doc = next;
                }
            }
            doc = doc.delete_category(DEFAULT_CATEGORY_ID);
            assert!(doc.validate().is_ok());
        }
    }

    #[test]
    fn test_update_settings() {
        let doc = Document::default();
        let next = doc.update_settings(&SettingsPatch {
            is_edit_mode: Some(true),
            ..SettingsPatch::default()
        });
        assert!(next.settings.is_edit_mode);
        assert!(!doc.settings.is_edit_mode);
        assert_eq!(next.collections, doc.collections);
    }

    #[test]
    fn test_set_extension_settings() {
        let doc = Document::default()
            .set_extension_settings("weather", json!({"city": "Lund"}))
            .set_extension_settings("nameday", json!({"enabled": true}));
        assert_eq!(doc.settings.extension_settings.len(), 2);
        assert_eq!(doc.settings.extension_settings["weather"]["city"], "Lund");
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let mut doc = Document::default();
        let duplicate = doc.collections[0].clone();
        doc.collections.push(duplicate);
        assert_eq!(
            doc.validate(),
            Err(ValidationError::DuplicateCollection(
                DEFAULT_COLLECTION_ID.to_string()
            ))
        );

        let mut doc = Document::default();
        let category = doc.collections[0].categories[0].clone();
        doc.collections[0].categories.push(category);
        assert!(matches!(
            doc.validate(),
            Err(ValidationError::DuplicateCategory { .. })
        ));

        let (mut doc, bm) = Document::default().add_bookmark_with_id("default", "A", "https://a.io", None);
        let bookmark = doc.find_bookmark("default", &bm).unwrap().clone();
        doc.collections[0].categories[0].bookmarks.push(bookmark);
        assert!(matches!(
            doc.validate(),
            Err(ValidationError::DuplicateBookmark { .. })
        ));

        let empty = Document {
            collections: Vec::new(),
            ..Document::default()
        };
        assert_eq!(empty.validate(), Err(ValidationError::NoCollections));
        assert!(empty.active_collection().is_none());
        assert!(empty.active_categories().is_empty());
    }

    #[test]
    fn test_json_shape() {
        let doc = Document::default();
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["activeCollectionId"], "default-collection");
        assert_eq!(value["collections"][0]["title"], "My Bookmarks");
        assert_eq!(value["collections"][0]["categories"][0]["id"], "default");
        assert_eq!(value["settings"]["isEditMode"], false);
    }
}
