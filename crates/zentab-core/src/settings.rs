//! Start page settings
//!
//! A flat record with a default for every field, so partially written or
//! older records still load. Updates are shallow merges of a
//! [`SettingsPatch`]; the nested extension map is replaced wholesale unless
//! a single entry is set through [`Settings::set_extension_settings`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::extensions;

/// Highest accepted background opacity
pub const MAX_BACKGROUND_OPACITY: u8 = 100;

/// Errors produced when parsing settings values from text
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Unknown setting: '{0}'")]
    UnknownKey(String),

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Size of the clock on the start page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl fmt::Display for ClockSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClockSize::Small => "small",
            ClockSize::Medium => "medium",
            ClockSize::Large => "large",
        };
        f.write_str(s)
    }
}

impl FromStr for ClockSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(ClockSize::Small),
            "medium" => Ok(ClockSize::Medium),
            "large" => Ok(ClockSize::Large),
            _ => Err("expected small, medium or large".to_string()),
        }
    }
}

/// How the date under the clock is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    #[default]
    Short,
    Long,
    None,
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DateFormat::Short => "short",
            DateFormat::Long => "long",
            DateFormat::None => "none",
        };
        f.write_str(s)
    }
}

impl FromStr for DateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "short" => Ok(DateFormat::Short),
            "long" => Ok(DateFormat::Long),
            "none" => Ok(DateFormat::None),
            _ => Err("expected short, long or none".to_string()),
        }
    }
}

/// Start page settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Background image URL; the start page picks a fallback when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image_url: Option<String>,

    /// Background overlay opacity, 0-100
    pub background_opacity: u8,

    /// Name used in the greeting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    #[serde(rename = "is24HourFormat")]
    pub is_24_hour_format: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_city: Option<String>,

    pub time_display_size: ClockSize,

    pub date_format: DateFormat,

    pub is_search_enabled: bool,

    /// Show editing affordances (add/rename/delete/drag)
    pub is_edit_mode: bool,

    /// Opaque per-extension settings blobs keyed by extension id
    pub extension_settings: BTreeMap<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_image_url: None,
            background_opacity: 0,
            user_name: None,
            is_24_hour_format: false,
            weather_city: None,
            time_display_size: ClockSize::default(),
            date_format: DateFormat::default(),
            is_search_enabled: true,
            is_edit_mode: false,
            extension_settings: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Shallow-merge a patch into these settings
    pub fn merge(&mut self, patch: &SettingsPatch) {
        if let Some(ref v) = patch.background_image_url {
            self.background_image_url = v.clone();
        }
        if let Some(v) = patch.background_opacity {
            self.background_opacity = v.min(MAX_BACKGROUND_OPACITY);
        }
        if let Some(ref v) = patch.user_name {
            self.user_name = v.clone();
        }
        if let Some(v) = patch.is_24_hour_format {
            self.is_24_hour_format = v;
        }
        if let Some(ref v) = patch.weather_city {
            self.weather_city = v.clone();
        }
        if let Some(v) = patch.time_display_size {
            self.time_display_size = v;
        }
        if let Some(v) = patch.date_format {
            self.date_format = v;
        }
        if let Some(v) = patch.is_search_enabled {
            self.is_search_enabled = v;
        }
        if let Some(v) = patch.is_edit_mode {
            self.is_edit_mode = v;
        }
        if let Some(ref v) = patch.extension_settings {
            self.extension_settings = v.clone();
        }
    }

    /// Replace the settings blob of a single extension, keeping the others
    pub fn set_extension_settings(&mut self, id: impl Into<String>, value: Value) {
        self.extension_settings.insert(id.into(), value);
    }

    /// Stored settings for an extension, or its registered defaults
    pub fn extension_settings(&self, id: &str) -> Option<Value> {
        self.extension_settings
            .get(id)
            .cloned()
            .or_else(|| extensions::find(id).map(|e| e.default_settings()))
    }
}

/// Partial settings update
///
/// Every `Some` field replaces the stored value. Optional text fields use
/// `Some(None)` to clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub background_image_url: Option<Option<String>>,
    pub background_opacity: Option<u8>,
    pub user_name: Option<Option<String>>,
    pub is_24_hour_format: Option<bool>,
    pub weather_city: Option<Option<String>>,
    pub time_display_size: Option<ClockSize>,
    pub date_format: Option<DateFormat>,
    pub is_search_enabled: Option<bool>,
    pub is_edit_mode: Option<bool>,
    pub extension_settings: Option<BTreeMap<String, Value>>,
}

/// Setting keys accepted by [`SettingsPatch::from_key_value`]
pub const SETTING_KEYS: &[&str] = &[
    "backgroundImageUrl",
    "backgroundOpacity",
    "userName",
    "is24HourFormat",
    "weatherCity",
    "timeDisplaySize",
    "dateFormat",
    "isSearchEnabled",
    "isEditMode",
];

impl SettingsPatch {
    /// True if the patch would not change anything
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build a single-field patch from a textual key and value
    ///
    /// Keys are the JSON field names (`isEditMode`) or their snake_case
    /// form (`is_edit_mode`). An empty value clears optional text fields.
    pub fn from_key_value(key: &str, value: &str) -> Result<Self, SettingsError> {
        let mut patch = Self::default();
        let text = || {
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        };
        let invalid = |reason: String| SettingsError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason,
        };

        match normalize_key(key).as_str() {
            "backgroundimageurl" => patch.background_image_url = Some(text()),
            "backgroundopacity" => {
                let opacity: u8 = value
                    .parse()
                    .map_err(|_| invalid("expected a number from 0 to 100".to_string()))?;
                if opacity > MAX_BACKGROUND_OPACITY {
                    return Err(invalid("expected a number from 0 to 100".to_string()));
                }
                patch.background_opacity = Some(opacity);
            }
            "username" => patch.user_name = Some(text()),
            "is24hourformat" => patch.is_24_hour_format = Some(parse_bool(value).map_err(invalid)?),
            "weathercity" => patch.weather_city = Some(text()),
            "timedisplaysize" => patch.time_display_size = Some(value.parse().map_err(invalid)?),
            "dateformat" => patch.date_format = Some(value.parse().map_err(invalid)?),
            "issearchenabled" => patch.is_search_enabled = Some(parse_bool(value).map_err(invalid)?),
            "iseditmode" => patch.is_edit_mode = Some(parse_bool(value).map_err(invalid)?),
            _ => return Err(SettingsError::UnknownKey(key.to_string())),
        }

        Ok(patch)
    }
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .collect::<String>()
        .to_ascii_lowercase()
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err("expected true or false".to_string()),
    }
}
