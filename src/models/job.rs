// Resize job data models
use serde::{Deserialize, Serialize};

/// A validated resize batch descriptor. Serialized as-is and handed to the
/// engine worker; the validator is the only producer, so the dimension
/// invariant (both set without aspect ratio, exactly one set with it) holds
/// by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequest {
    pub input_folder: String,
    pub output_folder: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub keep_aspect_ratio: bool,
    pub overwrite: bool,
}

/// Target dimensions after validation of the raw form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedDims {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// One per-file entry in the engine's report. `output_file` is absent for
/// entries the engine never attempted (e.g. unsupported formats).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    pub file: String,
    #[serde(default)]
    pub output_file: String,
    pub timestamp: String,
    pub status: String,
    pub message: String,
}

/// The engine's report for one submission. `results` preserves the engine's
/// reporting order exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobReport {
    pub output_folder: String,
    pub processing_time: String,
    pub results: Vec<FileOutcome>,
}

/// Visible lifecycle of the single in-flight job slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStatus {
    Ready,
    Processing,
    Done,
}
