use std::path::Path;

use crate::error::ConfigError;

use super::types::ChannelConfig;

/// Strict loader: missing files and malformed JSON are errors.
pub fn load_channels(path: &Path) -> Result<ChannelConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    ChannelConfig::from_json_str(&raw).map_err(ConfigError::Parse)
}

/// Tolerant loader used at startup: any failure yields an empty config.
pub fn load_channels_or_default(path: &Path) -> ChannelConfig {
    match load_channels(path) {
        Ok(cfg) => {
            tracing::debug!(target: "boom.config", path = %path.display(), "channel config loaded");
            cfg
        }
        Err(ConfigError::NotFound(_)) => {
            tracing::debug!(target: "boom.config", path = %path.display(), "no channel config, notifications disabled");
            ChannelConfig::default()
        }
        Err(e) => {
            tracing::warn!(target: "boom.config", path = %path.display(), error = %e, "ignoring unreadable channel config");
            ChannelConfig::default()
        }
    }
}
