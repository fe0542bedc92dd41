use anyhow::Result;

use boom_core::api::RunConfig;

use crate::config::JsonFileConfig;
use crate::credentials::EnvCredentials;
use crate::notifier::SlackNotifier;
use crate::services::Services;

const SLACK_TIMEOUT_MS: u64 = 10_000;

pub fn build_services(cfg: &RunConfig) -> Result<Services> {
    Ok(Services {
        notifier: Box::new(SlackNotifier::new(SLACK_TIMEOUT_MS)?),
        credentials: Box::new(EnvCredentials::default()),
        config: Box::new(JsonFileConfig::new(cfg.config_path.clone())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wires_slack_and_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = RunConfig {
            config_path: dir.path().join("none.json"),
            ..RunConfig::default()
        };

        let services = build_services(&cfg).unwrap();

        assert_eq!(services.notifier.channel(), "slack");
        assert!(services.config.load().is_empty());
    }
}
