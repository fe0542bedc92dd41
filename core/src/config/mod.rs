mod load;
mod types;

pub use load::{load_channels, load_channels_or_default};
pub use types::{
    ChannelConfig, ChannelEntry, RunConfig, DEFAULT_CONFIG_PATH, DEFAULT_TAIL_LINES,
    SLACK_CHANNEL, SLACK_TOKEN_ENV,
};
