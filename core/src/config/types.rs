use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Lines retained per stream when nothing else is configured.
pub const DEFAULT_TAIL_LINES: usize = 15;

/// Channel config file, resolved against the current directory.
pub const DEFAULT_CONFIG_PATH: &str = ".docker-boom.json";

/// The one channel kind that has a transport.
pub const SLACK_CHANNEL: &str = "slack";

pub const SLACK_TOKEN_ENV: &str = "SLACK_TOKEN";

/// Recipients configured for a single channel kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelEntry {
    #[serde(default)]
    pub recipients: Vec<String>,
}

/// Channel name to recipients, e.g. `{"slack": {"recipients": ["#ops"]}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelConfig {
    channels: HashMap<String, ChannelEntry>,
}

impl ChannelConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn with_channel<I, S>(mut self, channel: &str, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channels.insert(
            channel.to_string(),
            ChannelEntry {
                recipients: recipients.into_iter().map(Into::into).collect(),
            },
        );
        self
    }

    pub fn channel(&self, name: &str) -> Option<&ChannelEntry> {
        self.channels.get(name)
    }

    pub fn recipients(&self, name: &str) -> Option<&[String]> {
        self.channel(name).map(|c| c.recipients.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

/// Per-run settings resolved from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub tail_lines: usize,
    pub config_path: PathBuf,
}

fn default_tail_lines() -> usize {
    DEFAULT_TAIL_LINES
}

fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_PATH)
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tail_lines: default_tail_lines(),
            config_path: default_config_path(),
        }
    }
}
