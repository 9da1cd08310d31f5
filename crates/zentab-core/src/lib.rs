//! Zentab Core Library
//!
//! This crate provides the data layer of Zentab, a personal start page:
//! bookmarks grouped into categories, categories grouped into collections,
//! and a flat settings record, all kept in one locally stored JSON document.
//!
//! # Architecture
//!
//! - **Document**: immutable snapshots; every mutation returns a new one
//! - **Store**: single owner of the current snapshot, saves on every change
//!
//! # Quick Start
//!
//! ```text
//! let mut store = Store::open()?;
//!
//! // Add a bookmark to the default category
//! store.add_bookmark("default", "Example", &normalize_url("example.com"), None)?;
//!
//! // Read back the active collection
//! let categories = store.document().active_categories();
//! ```
//!
//! # Modules
//!
//! - `store`: Document store (main entry point)
//! - `document`: Document type and mutation API
//! - `models`: Bookmarks, categories and collections
//! - `settings`: Settings record and merge
//! - `extensions`: Built-in extension catalog
//! - `storage`: JSON persistence and migration
//! - `transfer`: Backup export and import
//! - `url`: URL normalization
//! - `config`: Application configuration

pub mod config;
pub mod document;
pub mod extensions;
pub mod models;
pub mod settings;
pub mod storage;
pub mod store;
pub mod transfer;
pub mod url;

pub use config::Config;
pub use document::{Document, ValidationError};
pub use models::{Bookmark, BookmarkPatch, Category, Collection};
pub use settings::{ClockSize, DateFormat, Settings, SettingsError, SettingsPatch};
pub use storage::{JsonPersistence, StorageError, StorageStats};
pub use store::{Store, SubscriptionId};
pub use transfer::{Export, ImportError};
pub use url::normalize_url;
