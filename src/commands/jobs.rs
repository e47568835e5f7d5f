// Resize job command handlers - validate, persist, dispatch, present
use crate::engine::{run_engine, JobState};
use crate::models::{JobRequest, ProcessingStatus};
use crate::preferences::{keys, PreferenceStore};
use crate::presenter::{present, RenderModel};
use crate::validator::validate;
use log::{debug, warn};
use serde_json::json;
use std::sync::Arc;
use tauri::State;

/// Writes the accepted form back to the preference store. The store itself
/// ignores writes while remember is off; an I/O failure here must not block
/// the job, so it only logs.
fn persist_accepted_form(
    input_folder: &str,
    output_folder: &str,
    width: &str,
    height: &str,
    keep_aspect_ratio: bool,
    overwrite: bool,
) {
    let store = PreferenceStore::at_default_location();
    let fields = [
        (keys::INPUT_FOLDER, json!(input_folder)),
        (keys::OUTPUT_FOLDER, json!(output_folder)),
        (keys::WIDTH, json!(width)),
        (keys::HEIGHT, json!(height)),
        (keys::KEEP_ASPECT_RATIO, json!(keep_aspect_ratio)),
        (keys::OVERWRITE, json!(overwrite)),
    ];

    for (key, value) in fields {
        if let Err(e) = store.save(key, value) {
            warn!("Failed to persist preference {:?}: {}", key, e);
        }
    }
}

/// Validates the form, sends the job to the engine and returns the rendered
/// report. Exactly one engine invocation per call; a second submission while
/// one is in flight is rejected before anything is dispatched.
#[tauri::command]
pub async fn submit_resize_job(
    state: State<'_, Arc<JobState>>,
    input_folder: String,
    output_folder: String,
    width: String,
    height: String,
    keep_aspect_ratio: bool,
    overwrite: bool,
) -> Result<RenderModel, String> {
    let dims = validate(
        &input_folder,
        &output_folder,
        &width,
        &height,
        keep_aspect_ratio,
    )
    .map_err(|e| e.to_string())?;

    persist_accepted_form(
        &input_folder,
        &output_folder,
        &width,
        &height,
        keep_aspect_ratio,
        overwrite,
    );

    let guard = state.inner().begin().map_err(|e| e.to_string())?;

    let job = JobRequest {
        input_folder,
        output_folder,
        width: dims.width,
        height: dims.height,
        keep_aspect_ratio,
        overwrite,
    };

    debug!(
        "Submitting resize job: {} -> {} ({:?}x{:?})",
        job.input_folder, job.output_folder, job.width, job.height
    );

    // On failure the guard drops here and the status returns to Ready
    let report = run_engine(&job).await.map_err(|e| e.to_string())?;

    let model = present(&report);
    guard.complete(report);

    Ok(model)
}

#[tauri::command]
pub fn get_processing_status(state: State<'_, Arc<JobState>>) -> ProcessingStatus {
    state.status()
}

/// Re-renders the report of the most recent completed run, if any survived
/// since the last submission.
#[tauri::command]
pub fn get_last_report(state: State<'_, Arc<JobState>>) -> Option<RenderModel> {
    state.last_report().map(|report| present(&report))
}
