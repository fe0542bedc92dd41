use std::collections::HashMap;

use boom_core::api::{CredentialProvider, SLACK_CHANNEL, SLACK_TOKEN_ENV};

/// Reads channel tokens from environment variables.
///
/// Unset or blank variables count as no credential.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    vars: HashMap<String, String>,
}

impl EnvCredentials {
    pub fn empty() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn with_var(mut self, channel: &str, var: &str) -> Self {
        self.vars.insert(channel.to_string(), var.to_string());
        self
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::empty().with_var(SLACK_CHANNEL, SLACK_TOKEN_ENV)
    }
}

impl CredentialProvider for EnvCredentials {
    fn token(&self, channel: &str) -> Option<String> {
        let var = self.vars.get(channel)?;
        let value = std::env::var(var).ok()?;
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a distinct variable so parallel tests do not interfere.

    #[test]
    fn reads_configured_variable() {
        std::env::set_var("BOOM_TEST_TOKEN_SET", " xoxb-abc ");
        let creds = EnvCredentials::empty().with_var("slack", "BOOM_TEST_TOKEN_SET");
        assert_eq!(creds.token("slack").as_deref(), Some("xoxb-abc"));
    }

    #[test]
    fn blank_or_unset_is_none() {
        std::env::set_var("BOOM_TEST_TOKEN_BLANK", "   ");
        let creds = EnvCredentials::empty()
            .with_var("slack", "BOOM_TEST_TOKEN_BLANK")
            .with_var("email", "BOOM_TEST_TOKEN_NEVER_SET");
        assert_eq!(creds.token("slack"), None);
        assert_eq!(creds.token("email"), None);
    }

    #[test]
    fn unknown_channel_is_none() {
        assert_eq!(EnvCredentials::default().token("irc"), None);
    }
}
