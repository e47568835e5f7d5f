//! Logging utilities for Rescale
//! Handles log file cleanup for 7-day retention

use crate::utils::get_logs_dir;
use log::info;
use std::fs;
use std::time::{Duration, SystemTime};

const LOG_RETENTION_DAYS: u64 = 7;

pub fn cleanup_old_logs() {
    let logs_dir = get_logs_dir();
    if !logs_dir.exists() {
        return;
    }

    let retention = Duration::from_secs(LOG_RETENTION_DAYS * 24 * 60 * 60);
    let now = SystemTime::now();

    let Ok(entries) = fs::read_dir(&logs_dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().map_or(false, |ext| ext == "log") {
            continue;
        }

        let expired = fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .ok()
            .and_then(|modified| now.duration_since(modified).ok())
            .map_or(false, |age| age > retention);

        if expired && fs::remove_file(&path).is_ok() {
            info!("Cleaned up old log: {:?}", path.file_name());
        }
    }
}
