//! Document store
//!
//! The `Store` owns the session's single [`Document`] and is its only
//! writer. Every replacement is pushed to subscribers and saved through the
//! persistence gateway.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = Store::open()?;  // Loads the stored document or the default
//!
//! let id = store.add_category("Reading")?;
//! store.add_bookmark(&id, "Rust Blog", "https://blog.rust-lang.org", None)?;
//!
//! let categories = store.document().active_categories();
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_json::Value;
use tracing::{error, info};

use crate::config::Config;
use crate::document::Document;
use crate::models::BookmarkPatch;
use crate::settings::SettingsPatch;
use crate::storage::{JsonPersistence, StorageStats};
use crate::transfer::{self, Export};

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Document)>;

/// Single-writer owner of the document
pub struct Store {
    /// The current snapshot
    doc: Document,
    /// Persistence gateway
    persistence: JsonPersistence,
    /// Configuration
    config: Config,
    /// Change listeners
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Store {
    /// Open the store with the default configuration
    ///
    /// Loads the stored document, falling back to the default document when
    /// nothing usable is stored. Nothing is written until the first change.
    pub fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        Ok(Self::open_with_config(config))
    }

    /// Open the store with a specific configuration
    pub fn open_with_config(config: Config) -> Self {
        let persistence = JsonPersistence::new(config.clone());
        let doc = persistence.load();

        Self {
            doc,
            persistence,
            config,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the current document
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Storage statistics for status output
    pub fn storage_stats(&self) -> StorageStats {
        self.persistence.stats()
    }

    // ==================== Snapshots ====================

    /// Replace the current document
    ///
    /// An identical snapshot is ignored. Otherwise subscribers are notified
    /// and the document is saved. If the save fails the new snapshot stays
    /// in memory and the error is returned.
    pub fn replace(&mut self, doc: Document) -> Result<()> {
        if doc == self.doc {
            return Ok(());
        }

        self.doc = doc;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.doc);
        }

        if let Err(e) = self.persistence.save(&self.doc) {
            error!("Failed to save document: {}", e);
            if let Some(hint) = e.recovery_suggestion() {
                error!("{}", hint);
            }
            return Err(e).context("Failed to save document");
        }
        Ok(())
    }

    /// Register a callback invoked with every new snapshot
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Document) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    // ==================== Collection Operations ====================

    /// Add a collection and switch to it, returning its id
    pub fn add_collection(&mut self, title: &str) -> Result<String> {
        let (doc, id) = self.doc.add_collection_with_id(title);
        self.replace(doc)?;
        Ok(id)
    }

    /// Remove a collection (the last one is kept)
    pub fn remove_collection(&mut self, id: &str) -> Result<()> {
        let doc = self.doc.remove_collection(id);
        self.replace(doc)
    }

    /// Rename a collection
    pub fn rename_collection(&mut self, id: &str, title: &str) -> Result<()> {
        let doc = self.doc.rename_collection(id, title);
        self.replace(doc)
    }

    /// Switch the active collection
    pub fn set_active_collection(&mut self, id: &str) -> Result<()> {
        let doc = self.doc.set_active_collection(id);
        self.replace(doc)
    }

    // ==================== Category Operations ====================

    /// Add a category to the active collection, returning its id
    pub fn add_category(&mut self, title: &str) -> Result<String> {
        let (doc, id) = self.doc.add_category_with_id(title);
        self.replace(doc)?;
        Ok(id)
    }

    /// Delete a category and its bookmarks
    pub fn delete_category(&mut self, id: &str) -> Result<()> {
        let doc = self.doc.delete_category(id);
        self.replace(doc)
    }

    /// Rename a category
    pub fn update_category(&mut self, id: &str, title: &str) -> Result<()> {
        let doc = self.doc.update_category(id, title);
        self.replace(doc)
    }

    /// Move a category within the active collection
    pub fn reorder_categories(&mut self, start: usize, end: usize) -> Result<()> {
        let doc = self.doc.reorder_categories(start, end);
        self.replace(doc)
    }

    // ==================== Bookmark Operations ====================

    /// Add a bookmark, returning its id
    pub fn add_bookmark(
        &mut self,
        category_id: &str,
        title: &str,
        url: &str,
        icon: Option<String>,
    ) -> Result<String> {
        let (doc, id) = self.doc.add_bookmark_with_id(category_id, title, url, icon);
        self.replace(doc)?;
        Ok(id)
    }

    /// Delete a bookmark
    pub fn delete_bookmark(&mut self, category_id: &str, bookmark_id: &str) -> Result<()> {
        let doc = self.doc.delete_bookmark(category_id, bookmark_id);
        self.replace(doc)
    }

    /// Update fields of a bookmark
    pub fn update_bookmark(
        &mut self,
        category_id: &str,
        bookmark_id: &str,
        patch: &BookmarkPatch,
    ) -> Result<()> {
        let doc = self.doc.update_bookmark(category_id, bookmark_id, patch);
        self.replace(doc)
    }

    /// Move a bookmark to a position in a category
    pub fn move_bookmark(
        &mut self,
        bookmark_id: &str,
        source_category_id: &str,
        target_category_id: &str,
        new_index: usize,
    ) -> Result<()> {
        let doc = self
            .doc
            .move_bookmark(bookmark_id, source_category_id, target_category_id, new_index);
        self.replace(doc)
    }

    // ==================== Settings ====================

    /// Merge a settings patch
    pub fn update_settings(&mut self, patch: &SettingsPatch) -> Result<()> {
        let doc = self.doc.update_settings(patch);
        self.replace(doc)
    }

    /// Replace one extension's settings
    pub fn set_extension_settings(&mut self, extension_id: &str, value: Value) -> Result<()> {
        let doc = self.doc.set_extension_settings(extension_id, value);
        self.replace(doc)
    }

    // ==================== Import/Export ====================

    /// Serialize the current document as a backup taken on `date`
    pub fn export(&self, date: NaiveDate) -> Result<Export> {
        let export =
            transfer::export_document(&self.doc, date).context("Failed to serialize document")?;
        info!("Exported document as {}", export.file_name);
        Ok(export)
    }

    /// Replace the document with an imported backup
    ///
    /// A rejected file leaves the document untouched; the error then
    /// downcasts to [`ImportError`](crate::transfer::ImportError). Any
    /// other error is a failed save.
    pub fn import(&mut self, bytes: &[u8]) -> Result<()> {
        let doc = transfer::import_document(bytes)?;
        info!("Imported document with {} collection(s)", doc.collections.len());
        self.replace(doc)
    }
}
