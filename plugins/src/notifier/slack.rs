use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use boom_core::api::{Notifier, NotifyError, SLACK_CHANNEL};

pub const SLACK_API_BASE: &str = "https://slack.com/api";

const BODY_SNIPPET_MAX: usize = 200;

/// Posts reports through the Slack Web API `chat.postMessage` method.
///
/// Recipients are whatever Slack accepts as a `channel`: a channel name
/// (`#ops`), a channel id, or a user id for a direct message.
pub struct SlackNotifier {
    client: reqwest::Client,
    api_base: String,
}

#[derive(Debug, Serialize)]
struct PostMessage<'a> {
    channel: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

impl SlackNotifier {
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be initialized (e.g. TLS backend failure).
    pub fn new(timeout_ms: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self {
            client,
            api_base: SLACK_API_BASE.to_string(),
        })
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat.postMessage", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    fn channel(&self) -> &str {
        SLACK_CHANNEL
    }

    async fn send(&self, token: &str, recipient: &str, text: &str) -> Result<(), NotifyError> {
        tracing::debug!(target: "boom.notify.slack", recipient, bytes = text.len(), "posting chat message");
        let resp = self
            .client
            .post(self.endpoint())
            .bearer_auth(token)
            .json(&PostMessage {
                channel: recipient,
                text,
            })
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.into()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NotifyError::HttpStatus {
                status: status.as_u16(),
                body_snippet: snippet(&body),
            });
        }

        let body: PostMessageResponse = resp
            .json()
            .await
            .map_err(|e| NotifyError::Decode(e.into()))?;

        if !body.ok {
            return Err(NotifyError::Api {
                error: body.error.unwrap_or_else(|| "unknown_error".to_string()),
            });
        }
        Ok(())
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_MAX).collect()
}
