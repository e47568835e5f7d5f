// Data models (structs)
pub mod job;
pub mod preferences;

pub use job::*;
pub use preferences::*;
