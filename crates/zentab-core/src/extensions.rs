//! Built-in extension catalog
//!
//! Extensions store an opaque settings blob under `settings.extensionSettings`.
//! The catalog only knows each extension's id and default blob; the blobs
//! are never interpreted here.

use serde_json::{json, Value};

/// A known start page extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extension {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    default_settings: fn() -> Value,
}

impl Extension {
    /// Settings blob used when none has been stored yet
    pub fn default_settings(&self) -> Value {
        (self.default_settings)()
    }
}

const EXTENSIONS: &[Extension] = &[
    Extension {
        id: "weather",
        name: "Weather & Date",
        description: "Display current date and weather for your city",
        default_settings: weather_defaults,
    },
    Extension {
        id: "nameday",
        name: "Nameday",
        description: "Displays today's Swedish nameday",
        default_settings: nameday_defaults,
    },
];

fn weather_defaults() -> Value {
    json!({"enabled": true, "city": "Stockholm", "dateFormat": "short"})
}

fn nameday_defaults() -> Value {
    json!({"enabled": true})
}

/// All known extensions
pub fn all() -> &'static [Extension] {
    EXTENSIONS
}

/// Look up an extension by id
pub fn find(id: &str) -> Option<&'static Extension> {
    EXTENSIONS.iter().find(|e| e.id == id)
}
