// Resize engine dispatch - external worker invocation and job lifecycle
pub mod state;
pub mod worker;

pub use state::*;
pub use worker::*;
