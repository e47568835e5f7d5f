// User preference persistence
pub mod store;

pub use store::*;
