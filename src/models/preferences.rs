// Persisted user preference models
use serde::{Deserialize, Serialize};

/// Snapshot of the persisted form state, used to seed the UI at startup.
/// Width and height stay raw form text; they are only interpreted by the
/// validator on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub input_folder: String,
    pub output_folder: String,
    pub width: String,
    pub height: String,
    pub keep_aspect_ratio: bool,
    pub overwrite: bool,
    pub remember: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            input_folder: String::new(),
            output_folder: String::new(),
            width: String::new(),
            height: String::new(),
            keep_aspect_ratio: false,
            overwrite: false,
            remember: false,
        }
    }
}
