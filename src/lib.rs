mod commands;
mod engine;
mod error;
mod file_manager;
mod logging;
mod models;
mod preferences;
mod presenter;
mod utils;
mod validator;

use commands::{
    folders::{pick_folder, reveal_in_explorer},
    jobs::{get_last_report, get_processing_status, submit_resize_job},
    preferences::{get_preferences, set_remember, update_preferences},
    updater::{check_for_update, download_and_install_update, get_current_version},
};
use engine::JobState;
use file_manager::initialize_json_file;
use std::sync::Arc;
use tauri_plugin_log::{Target, TargetKind};
use utils::{get_logs_dir, get_preferences_json_path, initialize_data_directories};

fn initialize_app_data() -> Result<(), String> {
    initialize_data_directories()?;

    // An empty store reads the same as an absent one; creating it up front
    // just makes first-run I/O problems visible early
    initialize_json_file(&get_preferences_json_path(), &serde_json::Map::new())?;

    Ok(())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    if let Err(e) = initialize_app_data() {
        eprintln!("Failed to initialize app data: {}", e);
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_process::init())
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_updater::Builder::new().build())
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Debug)
                .targets([
                    Target::new(TargetKind::Stdout),
                    Target::new(TargetKind::Folder {
                        path: get_logs_dir(),
                        file_name: None,
                    }),
                ])
                .build(),
        )
        .manage(Arc::new(JobState::new()))
        .setup(|_app| {
            logging::cleanup_old_logs();
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Resize job commands
            submit_resize_job,
            get_processing_status,
            get_last_report,
            // Preference commands
            get_preferences,
            update_preferences,
            set_remember,
            // Folder commands
            pick_folder,
            reveal_in_explorer,
            // Updater commands
            check_for_update,
            download_and_install_update,
            get_current_version,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
