//! Backup export and import
//!
//! Exports are the full document as pretty JSON, named
//! `zentab-backup-<YYYY-MM-DD>.json`. Imports must carry a top-level
//! `collections` array and decode into well-formed entities; anything else
//! is rejected before the current document is touched.

use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;

use crate::document::{Document, ValidationError};
use crate::storage::migration;

/// Prefix of exported file names
pub const BACKUP_PREFIX: &str = "zentab-backup";

/// Reasons an import is rejected
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to parse file: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Invalid file structure. Expected collections.")]
    MissingCollections,

    #[error("Invalid entry in file: {0}")]
    InvalidEntity(#[source] serde_json::Error),

    #[error("Invalid document: {0}")]
    Invalid(#[from] ValidationError),
}

/// A serialized backup ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// File name for a backup taken on `date`
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("{}-{}.json", BACKUP_PREFIX, date.format("%Y-%m-%d"))
}

/// Serialize the whole document for download
pub fn export_document(doc: &Document, date: NaiveDate) -> serde_json::Result<Export> {
    Ok(Export {
        file_name: backup_file_name(date),
        bytes: serde_json::to_vec_pretty(doc)?,
    })
}

/// Parse and validate an uploaded backup
pub fn import_document(bytes: &[u8]) -> Result<Document, ImportError> {
    let mut value: Value = serde_json::from_slice(bytes).map_err(ImportError::Parse)?;

    let has_collections = value
        .get("collections")
        .is_some_and(Value::is_array);
    if !has_collections {
        return Err(ImportError::MissingCollections);
    }

    if let Some(settings) = value.get_mut("settings").and_then(Value::as_object_mut) {
        migration::migrate_settings(settings);
    }

    let doc: Document = serde_json::from_value(value).map_err(ImportError::InvalidEntity)?;
    doc.validate()?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookmarkPatch;
    use serde_json::json;

    fn sample() -> Document {
        let (doc, work) = Document::default().add_collection_with_id("Work");
        let (doc, tools) = doc.add_category_with_id("Tools");
        doc.add_bookmark(&tools, "Docs", "https://docs.rs", Some("book".to_string()))
            .add_bookmark(&tools, "Crates", "https://crates.io", None)
            .set_extension_settings("weather", json!({"city": "Malmo", "enabled": false}))
            .rename_collection(&work, "Job")
    }

    #[test]
    fn test_backup_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(backup_file_name(date), "zentab-backup-2024-03-09.json");
    }

    #[test]
    fn test_export_import_round_trip() {
        let doc = sample();
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let export = export_document(&doc, date).unwrap();
        assert_eq!(export.file_name, "zentab-backup-2025-01-31.json");

        let imported = import_document(&export.bytes).unwrap();
        assert_eq!(imported, doc);
    }

    #[test]
    fn test_round_trip_after_edits() {
        let doc = sample();
        let (category, bookmark) = {
            let (c, b) = doc
                .active_categories()
                .iter()
                .find_map(|c| c.bookmarks.first().map(|b| (c, b)))
                .unwrap();
            (c.id.clone(), b.id.clone())
        };
        let doc = doc.update_bookmark(&category, &bookmark, &BookmarkPatch::default().icon(None));
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let bytes = export_document(&doc, date).unwrap().bytes;
        assert_eq!(import_document(&bytes).unwrap(), doc);
    }

    #[test]
    fn test_missing_collections_rejected() {
        let err = import_document(br#"{"foo": 1}"#).unwrap_err();
        assert!(matches!(err, ImportError::MissingCollections));
        assert_eq!(err.to_string(), "Invalid file structure. Expected collections.");

        let err = import_document(br#"{"collections": "nope"}"#).unwrap_err();
        assert!(matches!(err, ImportError::MissingCollections));

        let err = import_document(br#"[1, 2, 3]"#).unwrap_err();
        assert!(matches!(err, ImportError::MissingCollections));
    }

    #[test]
    fn test_legacy_shape_rejected() {
        let legacy = br#"{"categories": [], "settings": {"isCleanMode": true}}"#;
        assert!(matches!(
            import_document(legacy),
            Err(ImportError::MissingCollections)
        ));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = import_document(b"not json at all").unwrap_err();
        assert!(matches!(err, ImportError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse file"));
    }

    #[test]
    fn test_malformed_bookmark_rejected() {
        let file = br#"{
            "collections": [{"id": "c", "title": "C", "categories": [
                {"id": "k", "title": "K", "bookmarks": [{"id": "b", "title": "no url"}]}
            ]}],
            "activeCollectionId": "c"
        }"#;
        assert!(matches!(
            import_document(file),
            Err(ImportError::InvalidEntity(_))
        ));
    }

    #[test]
    fn test_empty_collections_rejected() {
        let err = import_document(br#"{"collections": []}"#).unwrap_err();
        assert!(matches!(
            err,
            ImportError::Invalid(ValidationError::NoCollections)
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let file = br#"{"collections": [
            {"id": "c", "title": "A", "categories": []},
            {"id": "c", "title": "B", "categories": []}
        ]}"#;
        assert!(matches!(
            import_document(file),
            Err(ImportError::Invalid(ValidationError::DuplicateCollection(_)))
        ));
    }

    #[test]
    fn test_minimal_file_gets_default_settings() {
        let file = br#"{"collections": [{"id": "c", "title": "Only", "categories": []}]}"#;
        let doc = import_document(file).unwrap();
        assert_eq!(doc.active_collection().unwrap().title, "Only");
        assert!(doc.active_collection_id.is_empty());
        assert!(doc.settings.is_search_enabled);
    }

    #[test]
    fn test_legacy_clean_mode_in_backup_migrated() {
        let file = br#"{
            "collections": [{"id": "c", "title": "C", "categories": []}],
            "activeCollectionId": "c",
            "settings": {"isCleanMode": false}
        }"#;
        let doc = import_document(file).unwrap();
        assert!(doc.settings.is_edit_mode);
    }
}
