//! Schema detection and forward migration of stored documents
//!
//! Runs on the raw JSON value before it is decoded into a
//! [`Document`](crate::Document).
//!
//! - Documents from before collections existed (a flat `categories` array)
//!   are not converted; they are rejected and the caller starts fresh.
//! - A legacy `settings.isCleanMode` flag becomes `isEditMode = !isCleanMode`.

use serde_json::{Map, Value};
use thiserror::Error;

/// Keys used in the stored JSON document
mod keys {
    pub const COLLECTIONS: &str = "collections";
    pub const CATEGORIES: &str = "categories";
    pub const SETTINGS: &str = "settings";
    pub const IS_CLEAN_MODE: &str = "isCleanMode";
    pub const IS_EDIT_MODE: &str = "isEditMode";
}

/// Shape of a stored document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// Current shape: top-level `collections` array
    Collections,
    /// Single-collection shape: top-level `categories` array
    LegacyCategories,
    /// Anything else
    Unknown,
}

/// Reasons a stored document cannot be migrated
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MigrationError {
    #[error("Document uses the pre-collections format, which is no longer supported")]
    LegacyFormat,

    #[error("Document has no 'collections' array")]
    MissingCollections,
}

/// Detect the shape of a stored document
pub fn detect_schema(value: &Value) -> Schema {
    let Some(object) = value.as_object() else {
        return Schema::Unknown;
    };

    if object.get(keys::COLLECTIONS).is_some_and(Value::is_array) {
        Schema::Collections
    } else if object.get(keys::CATEGORIES).is_some_and(Value::is_array) {
        Schema::LegacyCategories
    } else {
        Schema::Unknown
    }
}

/// Bring a stored document up to the current shape
pub fn migrate(mut value: Value) -> Result<Value, MigrationError> {
    match detect_schema(&value) {
        Schema::Collections => {}
        Schema::LegacyCategories => return Err(MigrationError::LegacyFormat),
        Schema::Unknown => return Err(MigrationError::MissingCollections),
    }

    if let Some(settings) = value
        .get_mut(keys::SETTINGS)
        .and_then(Value::as_object_mut)
    {
        migrate_settings(settings);
    }

    Ok(value)
}

/// Replace a boolean `isCleanMode` with the inverse `isEditMode`
///
/// Returns true if the settings object was changed.
pub fn migrate_settings(settings: &mut Map<String, Value>) -> bool {
    let Some(clean) = settings.get(keys::IS_CLEAN_MODE).and_then(Value::as_bool) else {
        return false;
    };

    settings.remove(keys::IS_CLEAN_MODE);
    settings.insert(keys::IS_EDIT_MODE.to_string(), Value::Bool(!clean));
    tracing::info!(
        "Migrated legacy isCleanMode={} to isEditMode={}",
        clean,
        !clean
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_schema() {
        assert_eq!(
            detect_schema(&json!({"collections": []})),
            Schema::Collections
        );
        assert_eq!(
            detect_schema(&json!({"categories": [], "settings": {}})),
            Schema::LegacyCategories
        );
        assert_eq!(detect_schema(&json!({"foo": 1})), Schema::Unknown);
        assert_eq!(detect_schema(&json!({"collections": {}})), Schema::Unknown);
        assert_eq!(detect_schema(&json!([1, 2])), Schema::Unknown);
    }

    #[test]
    fn test_legacy_format_rejected() {
        let legacy = json!({
            "categories": [{"id": "default", "title": "General", "bookmarks": []}],
            "settings": {"is24HourFormat": false, "isCleanMode": false}
        });
        assert_eq!(migrate(legacy), Err(MigrationError::LegacyFormat));
        assert_eq!(
            migrate(json!({"foo": 1})),
            Err(MigrationError::MissingCollections)
        );
    }

    #[test]
    fn test_clean_mode_becomes_edit_mode() {
        let stored = json!({
            "collections": [],
            "activeCollectionId": "x",
            "settings": {"isCleanMode": true, "userName": "Ada"}
        });
        let migrated = migrate(stored).unwrap();
        let settings = migrated["settings"].as_object().unwrap();
        assert_eq!(settings["isEditMode"], false);
        assert!(!settings.contains_key("isCleanMode"));
        assert_eq!(settings["userName"], "Ada");
    }

    #[test]
    fn test_clean_mode_false_enables_edit_mode() {
        let mut settings = json!({"isCleanMode": false})
            .as_object()
            .cloned()
            .unwrap();
        assert!(migrate_settings(&mut settings));
        assert_eq!(settings["isEditMode"], true);
    }

    #[test]
    fn test_current_settings_untouched() {
        let mut settings = json!({"isEditMode": true}).as_object().cloned().unwrap();
        assert!(!migrate_settings(&mut settings));
        assert_eq!(settings["isEditMode"], true);
    }
}
