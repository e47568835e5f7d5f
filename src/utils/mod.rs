// Shared path helpers
pub mod paths;

pub use paths::*;
