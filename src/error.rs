// Job-level error taxonomy
use thiserror::Error;

/// Everything that can go wrong between the submit button and a rendered
/// report. The validation variants are user-correctable input problems; the
/// engine variants cover the external call itself. All surface as a single
/// human-readable message at the command boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobError {
    #[error("Select both an input folder and an output folder.")]
    MissingFolder,

    #[error("Width and height must be whole numbers.")]
    InvalidNumber,

    #[error("Dimensions must be at least 1 pixel.")]
    OutOfRange,

    #[error("Enter a width or a height when keeping the aspect ratio.")]
    MissingDimension,

    #[error("Enter only one of width or height when keeping the aspect ratio.")]
    AmbiguousDimension,

    #[error("A resize job is already running.")]
    JobInProgress,

    #[error("The resize engine could not be run: {0}")]
    EngineUnavailable(String),

    #[error("The resize engine returned an unreadable report: {0}")]
    MalformedResponse(String),
}
