//! Data models for Zentab
//!
//! Defines the bookmark hierarchy: Collection -> Category -> Bookmark.
//! Ownership is strictly tree-shaped and every sequence is ordered; the
//! order is what the start page renders and must survive persistence.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id of the collection in a freshly created document
pub const DEFAULT_COLLECTION_ID: &str = "default-collection";
/// Title of the collection in a freshly created document
pub const DEFAULT_COLLECTION_TITLE: &str = "My Bookmarks";
/// Id of the category in a freshly created document
pub const DEFAULT_CATEGORY_ID: &str = "default";
/// Title of the category in a freshly created document
pub const DEFAULT_CATEGORY_TITLE: &str = "General";

/// Generate a fresh entity id
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A single link entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bookmark {
    /// Unique identifier within the owning category
    pub id: String,
    /// Display title
    pub title: String,
    /// Target URL (already normalized by the caller)
    pub url: String,
    /// Optional custom icon URL or icon name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Bookmark {
    /// Create a new bookmark with a freshly generated id
    pub fn new(title: impl Into<String>, url: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            url: url.into(),
            icon,
        }
    }

    /// Apply a partial update. Fields absent from the patch are kept.
    pub fn apply(&mut self, patch: &BookmarkPatch) {
        if let Some(ref title) = patch.title {
            self.title = title.clone();
        }
        if let Some(ref url) = patch.url {
            self.url = url.clone();
        }
        if let Some(ref icon) = patch.icon {
            self.icon = icon.clone();
        }
    }
}

/// Partial bookmark update
///
/// `icon: Some(None)` clears the icon, `icon: None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub icon: Option<Option<String>>,
}

impl BookmarkPatch {
    /// True if the patch would not change anything
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none() && self.icon.is_none()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn icon(mut self, icon: Option<String>) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// A named grouping of bookmarks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique identifier within the owning collection
    pub id: String,
    /// Display title, may be empty
    pub title: String,
    /// Bookmarks in display order
    pub bookmarks: Vec<Bookmark>,
}

impl Category {
    /// Create an empty category with a freshly generated id
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(new_id(), title)
    }

    /// Create an empty category with a specific id
    pub fn with_id(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            bookmarks: Vec::new(),
        }
    }

    /// Get a bookmark by id
    pub fn bookmark(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    /// Position of a bookmark in this category
    pub fn position(&self, id: &str) -> Option<usize> {
        self.bookmarks.iter().position(|b| b.id == id)
    }
}

/// A top-level workspace of categories
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collection {
    /// Unique identifier within the document
    pub id: String,
    /// Display title
    pub title: String,
    /// Categories in display order
    pub categories: Vec<Category>,
}

impl Collection {
    /// Create an empty collection with a freshly generated id
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(new_id(), title)
    }

    /// Create an empty collection with a specific id
    pub fn with_id(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            categories: Vec::new(),
        }
    }

    /// Get a category by id
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Total number of bookmarks across all categories
    pub fn bookmark_count(&self) -> usize {
        self.categories.iter().map(|c| c.bookmarks.len()).sum()
    }
}
