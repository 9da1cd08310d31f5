//! JSON document persistence
//!
//! Handles saving and loading the Zentab document to/from the filesystem.
//! Uses atomic writes (write to temp file, then rename) to prevent corruption.
//!
//! Storage location: `~/.local/share/zentab/` (configurable via `Config`)
//!
//! Files:
//! - `zentab_data.json` - The document
//! - `zentab_data.json.corrupt.backup` - Last rejected document, if any

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use super::error::{StorageError, StorageResult};
use super::migration;
use crate::config::Config;
use crate::document::Document;

/// Size information about the stored document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageStats {
    pub document_exists: bool,
    pub document_size: u64,
    pub backup_exists: bool,
}

impl StorageStats {
    /// Document size formatted for humans
    pub fn document_size_human(&self) -> String {
        format_size(self.document_size)
    }
}

/// Persistence gateway for the JSON document
pub struct JsonPersistence {
    config: Config,
}

impl JsonPersistence {
    /// Create a new persistence handler with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path of the stored document
    pub fn path(&self) -> PathBuf {
        self.config.document_path()
    }

    /// Path where a rejected document is kept
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path().into_os_string();
        name.push(".corrupt.backup");
        PathBuf::from(name)
    }

    /// Check if a document exists on disk
    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    /// Read the stored text without interpreting it
    ///
    /// Returns `None` if nothing has been stored yet.
    pub fn load_raw(&self) -> StorageResult<Option<String>> {
        let path = self.path();
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::from_read(e, path)),
        }
    }

    /// Load the document
    ///
    /// Never fails: a missing document yields the default one, and an
    /// unreadable, malformed or outdated document is set aside as a backup
    /// and replaced by the default one.
    pub fn load(&self) -> Document {
        let content = match self.load_raw() {
            Ok(Some(content)) => content,
            Ok(None) => {
                debug!("No stored document at {:?}, using default", self.path());
                return Document::default();
            }
            Err(e) => {
                warn!("Failed to read stored document: {}. Using default.", e);
                return Document::default();
            }
        };

        match decode(&content) {
            Ok(doc) => doc,
            Err(details) => {
                warn!(
                    "Stored document at {:?} rejected: {}. Resetting to default.",
                    self.path(),
                    details
                );
                self.keep_backup(&content);
                Document::default()
            }
        }
    }

    /// Save a document to disk using atomic write
    pub fn save(&self, doc: &Document) -> StorageResult<()> {
        let bytes = serde_json::to_vec_pretty(doc)?;
        let path = self.path();
        atomic_write(&path, &bytes)?;
        debug!("Saved document ({} bytes) to {:?}", bytes.len(), path);
        Ok(())
    }

    /// Gather size information
    pub fn stats(&self) -> StorageStats {
        let document_size = fs::metadata(self.path()).map(|m| m.len()).ok();
        StorageStats {
            document_exists: document_size.is_some(),
            document_size: document_size.unwrap_or(0),
            backup_exists: self.backup_path().exists(),
        }
    }

    fn keep_backup(&self, content: &str) {
        let backup = self.backup_path();
        match atomic_write(&backup, content.as_bytes()) {
            Ok(()) => warn!("Rejected document kept at {:?}", backup),
            Err(e) => warn!("Could not keep rejected document: {}", e),
        }
    }
}

/// Decode stored text into a document, migrating older shapes
///
/// The result must hold at least one collection and unique ids, the same
/// checks an import has to pass.
fn decode(content: &str) -> Result<Document, String> {
    let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let value = migration::migrate(value).map_err(|e| e.to_string())?;
    let doc: Document = serde_json::from_value(value).map_err(|e| e.to_string())?;
    doc.validate().map_err(|e| e.to_string())?;
    Ok(doc)
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::from_io(e, temp_path.clone()))?;
    file.write_all(data)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;
    file.sync_all()
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|source| StorageError::AtomicWriteFailed {
        from: temp_path.clone(),
        to: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
