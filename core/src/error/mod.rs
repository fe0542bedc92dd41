mod config_error;
mod notify_error;
mod runner_error;

pub use config_error::ConfigError;
pub use notify_error::NotifyError;
pub use runner_error::RunnerError;
