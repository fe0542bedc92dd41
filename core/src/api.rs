//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `boom_core::api` instead of reaching into internal modules.

pub use crate::config::{
    load_channels, load_channels_or_default, ChannelConfig, ChannelEntry, RunConfig,
    DEFAULT_CONFIG_PATH, DEFAULT_TAIL_LINES, SLACK_CHANNEL, SLACK_TOKEN_ENV,
};
pub use crate::error::{ConfigError, NotifyError, RunnerError};
pub use crate::notify::{
    dispatch, ConfigProvider, CredentialProvider, DispatchOutcome, Notifier, SkipReason,
};
pub use crate::report::format_report;
pub use crate::runner::{run, run_with, Invocation, RunResult, SETUP_FAILED};
pub use crate::tail::{capture, LineTail};
