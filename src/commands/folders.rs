// Folder command handlers - native picker dialog and reveal-in-explorer
use crate::preferences::{keys, PreferenceStore};
use log::warn;
use serde_json::json;
use tauri::AppHandle;
use tauri_plugin_dialog::DialogExt;
use tauri_plugin_opener::OpenerExt;

/// Which form field a picked folder feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FolderTarget {
    Input,
    Output,
}

/// Opens the native directory picker. Returns None on cancellation - the
/// form keeps its previous value and validation reports the missing folder
/// on submit if it was never filled.
#[tauri::command]
pub async fn pick_folder(app: AppHandle, target: FolderTarget) -> Result<Option<String>, String> {
    let Some(folder) = app.dialog().file().blocking_pick_folder() else {
        return Ok(None);
    };

    let path = folder.to_string();

    let key = match target {
        FolderTarget::Input => keys::INPUT_FOLDER,
        FolderTarget::Output => keys::OUTPUT_FOLDER,
    };
    if let Err(e) = PreferenceStore::at_default_location().save(key, json!(path)) {
        warn!("Failed to persist picked folder: {}", e);
    }

    Ok(Some(path))
}

/// Opens the given folder in the host's file browser. Fire-and-forget: the
/// file manager owns the outcome from here, so failures only log.
#[tauri::command]
pub fn reveal_in_explorer(app: AppHandle, path: String) {
    if let Err(e) = app.opener().open_path(path.as_str(), None::<&str>) {
        warn!("Failed to open {:?} in file browser: {}", path, e);
    }
}
