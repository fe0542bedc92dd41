pub mod exit;
mod run;
mod types;

pub use exit::{normalize_exit, SETUP_FAILED, WAIT_FAILED};
pub use run::{run, run_with};
pub use types::{Invocation, RunResult};
