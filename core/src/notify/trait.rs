use async_trait::async_trait;

use crate::config::ChannelConfig;
use crate::error::NotifyError;

/// Delivers a text message to one recipient of a channel kind.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Channel kind served by this transport; matched against config keys.
    fn channel(&self) -> &str;

    async fn send(&self, token: &str, recipient: &str, text: &str) -> Result<(), NotifyError>;
}

/// Looks up the credential for a channel kind.
pub trait CredentialProvider: Send + Sync {
    /// `None` disables notification for that channel.
    fn token(&self, channel: &str) -> Option<String>;
}

/// Supplies the channel-to-recipients mapping for a run.
pub trait ConfigProvider: Send + Sync {
    fn load(&self) -> ChannelConfig;
}
