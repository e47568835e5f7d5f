// Preference command handlers - load at startup, partial updates, remember switch
use crate::models::Preferences;
use crate::preferences::{keys, PreferenceStore};
use log::debug;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesParams {
    pub input_folder: Option<String>,
    pub output_folder: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub keep_aspect_ratio: Option<bool>,
    pub overwrite: Option<bool>,
}

/// Seeds the form at startup. Malformed stored values degrade to defaults
/// inside the store, so this never fails on corrupt local state.
#[tauri::command]
pub fn get_preferences() -> Result<Preferences, String> {
    Ok(PreferenceStore::at_default_location().snapshot())
}

/// Partial update: only the supplied fields are written, and only while the
/// remember switch is on.
#[tauri::command]
pub fn update_preferences(params: UpdatePreferencesParams) -> Result<Preferences, String> {
    let store = PreferenceStore::at_default_location();

    if let Some(input_folder) = params.input_folder {
        store.save(keys::INPUT_FOLDER, json!(input_folder))?;
    }
    if let Some(output_folder) = params.output_folder {
        store.save(keys::OUTPUT_FOLDER, json!(output_folder))?;
    }
    if let Some(width) = params.width {
        store.save(keys::WIDTH, json!(width))?;
    }
    if let Some(height) = params.height {
        store.save(keys::HEIGHT, json!(height))?;
    }
    if let Some(keep_aspect_ratio) = params.keep_aspect_ratio {
        store.save(keys::KEEP_ASPECT_RATIO, json!(keep_aspect_ratio))?;
    }
    if let Some(overwrite) = params.overwrite {
        store.save(keys::OVERWRITE, json!(overwrite))?;
    }

    Ok(store.snapshot())
}

/// Master switch: turning remember off wipes the whole store immediately.
#[tauri::command]
pub fn set_remember(remember: bool) -> Result<Preferences, String> {
    let store = PreferenceStore::at_default_location();
    store.set_remember(remember)?;

    debug!("Remember switch set to {}", remember);
    Ok(store.snapshot())
}
