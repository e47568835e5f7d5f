// Tauri command handlers - one file per domain
pub mod folders;
pub mod jobs;
pub mod preferences;
pub mod updater;
