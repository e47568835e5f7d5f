// Atomic JSON file operations
pub mod json_ops;

pub use json_ops::*;
