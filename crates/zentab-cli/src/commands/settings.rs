//! Settings and extension command handlers

use anyhow::{bail, Context, Result};
use serde_json::Value;

use zentab_core::extensions;
use zentab_core::settings::SETTING_KEYS;
use zentab_core::{SettingsPatch, Store};

use crate::output::{Output, OutputFormat};

/// Show current settings
pub fn show(store: &Store, output: &Output) -> Result<()> {
    output.print_settings(&store.document().settings);
    Ok(())
}

/// Set a single setting
pub fn set(store: &mut Store, key: String, value: String, output: &Output) -> Result<()> {
    let patch = SettingsPatch::from_key_value(&key, &value).map_err(|e| {
        anyhow::anyhow!("{}\nValid keys: {}", e, SETTING_KEYS.join(", "))
    })?;
    store
        .update_settings(&patch)
        .context("Failed to update settings")?;
    output.success(&format!("Set {} = {}", key, value));
    Ok(())
}

/// Clear an optional text setting
pub fn unset(store: &mut Store, key: String, output: &Output) -> Result<()> {
    let patch = SettingsPatch::from_key_value(&key, "")
        .with_context(|| format!("'{}' cannot be unset", key))?;
    store
        .update_settings(&patch)
        .context("Failed to update settings")?;
    output.success(&format!("Unset {}", key));
    Ok(())
}

/// List known extensions and whether they have stored settings
pub fn list_extensions(store: &Store, output: &Output) -> Result<()> {
    let stored = &store.document().settings.extension_settings;

    match output.format {
        OutputFormat::Human => {
            for ext in extensions::all() {
                let state = if stored.contains_key(ext.id) {
                    "configured"
                } else {
                    "defaults"
                };
                println!("{:<10} {:<16} {} ({})", ext.id, ext.name, ext.description, state);
            }
            // Blobs for extensions this build doesn't know about are kept as-is
            for id in stored.keys().filter(|id| extensions::find(id).is_none()) {
                println!("{:<10} {:<16} (unknown extension, configured)", id, "");
            }
        }
        OutputFormat::Json => {
            let items: Vec<_> = extensions::all()
                .iter()
                .map(|ext| {
                    serde_json::json!({
                        "id": ext.id,
                        "name": ext.name,
                        "description": ext.description,
                        "configured": stored.contains_key(ext.id),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        OutputFormat::Quiet => {
            for ext in extensions::all() {
                println!("{}", ext.id);
            }
        }
    }
    Ok(())
}

/// Show the effective settings of one extension
pub fn show_extension(store: &Store, id: String, output: &Output) -> Result<()> {
    let Some(settings) = store.document().settings.extension_settings(&id) else {
        bail!("Unknown extension: {}", id);
    };

    if output.is_quiet() {
        println!("{}", serde_json::to_string(&settings)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    }
    Ok(())
}

/// Replace the settings blob of one extension
pub fn set_extension(store: &mut Store, id: String, json: String, output: &Output) -> Result<()> {
    if extensions::find(&id).is_none() {
        bail!(
            "Unknown extension: {}\nKnown extensions: {}",
            id,
            extensions::all()
                .iter()
                .map(|e| e.id)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let value: Value =
        serde_json::from_str(&json).context("Extension settings must be valid JSON")?;
    store
        .set_extension_settings(&id, value)
        .context("Failed to update extension settings")?;
    output.success(&format!("Updated settings for {}", id));
    Ok(())
}
