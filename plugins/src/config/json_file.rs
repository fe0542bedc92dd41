use std::path::PathBuf;

use boom_core::api::{load_channels_or_default, ChannelConfig, ConfigProvider};

/// Channel config read from a JSON file; unreadable files yield an empty config.
#[derive(Debug, Clone)]
pub struct JsonFileConfig {
    path: PathBuf,
}

impl JsonFileConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigProvider for JsonFileConfig {
    fn load(&self) -> ChannelConfig {
        load_channels_or_default(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_recipients_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".docker-boom.json");
        std::fs::write(&path, r##"{"slack": {"recipients": ["#ci", "@dev"]}}"##).unwrap();

        let cfg = JsonFileConfig::new(&path).load();

        assert_eq!(
            cfg.recipients("slack"),
            Some(&["#ci".to_string(), "@dev".to_string()][..])
        );
    }

    #[test]
    fn missing_or_broken_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonFileConfig::new(dir.path().join("absent.json")).load().is_empty());

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{\"slack\": [").unwrap();
        assert!(JsonFileConfig::new(&broken).load().is_empty());
    }
}
