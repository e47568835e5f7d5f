// Update check and install - queried once at startup, never coordinated with
// resize jobs
use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Emitter};
use tauri_plugin_updater::UpdaterExt;
use time::format_description::well_known::Rfc3339;

/// Information about an available update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateInfo {
    pub version: String,
    pub current_version: String,
    pub date: Option<String>,
    pub body: Option<String>,
}

/// Progress information during download
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProgress {
    pub downloaded: u64,
    pub total: u64,
    pub percent: u32,
}

/// Check if an update is available
#[tauri::command]
pub async fn check_for_update(app: AppHandle) -> Result<Option<UpdateInfo>, String> {
    let updater = app.updater().map_err(|e| e.to_string())?;

    match updater.check().await {
        Ok(Some(update)) => Ok(Some(UpdateInfo {
            version: update.version.clone(),
            current_version: update.current_version.clone(),
            date: update.date.and_then(|d| d.format(&Rfc3339).ok()),
            body: update.body.clone(),
        })),
        Ok(None) => Ok(None),
        Err(e) => Err(format!("Failed to check for updates: {}", e)),
    }
}

/// Downloads the available update, installs it and restarts the process.
#[tauri::command]
pub async fn download_and_install_update(app: AppHandle) -> Result<(), String> {
    let updater = app.updater().map_err(|e| e.to_string())?;
    let progress_app = app.clone();

    let update = updater
        .check()
        .await
        .map_err(|e| format!("Failed to check for updates: {}", e))?
        .ok_or_else(|| "No update available".to_string())?;

    let _ = app.emit("update:downloading", ());

    let bytes = update
        .download(
            move |downloaded, total| {
                let total_bytes = total.unwrap_or(0);
                let percent = if total_bytes > 0 {
                    ((downloaded as f64 / total_bytes as f64) * 100.0) as u32
                } else {
                    0
                };

                let _ = progress_app.emit(
                    "update:progress",
                    UpdateProgress {
                        downloaded: downloaded as u64,
                        total: total_bytes,
                        percent,
                    },
                );
            },
            || {},
        )
        .await
        .map_err(|e| format!("Failed to download update: {}", e))?;

    update
        .install(bytes)
        .map_err(|e| format!("Failed to install update: {}", e))?;

    let _ = app.emit("update:installed", ());
    app.restart()
}

/// Get the current app version
#[tauri::command]
pub fn get_current_version(app: AppHandle) -> String {
    app.package_info().version.to_string()
}
