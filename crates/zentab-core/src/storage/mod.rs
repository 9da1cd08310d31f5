//! Storage layer
//!
//! Persists the document as a single JSON file.
//!
//! ## Architecture
//!
//! - **persistence**: atomic load/save of `zentab_data.json`
//! - **migration**: shape detection and forward migration applied on load
//!   and import
//!
//! Loading never fails: missing, unreadable or outdated documents fall back
//! to the default document.

pub mod error;
pub mod migration;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use migration::{detect_schema, migrate, MigrationError, Schema};
pub use persistence::{JsonPersistence, StorageStats};
