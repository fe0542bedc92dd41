use crate::config::ChannelConfig;
use crate::report::format_report;
use crate::runner::{Invocation, RunResult};

use super::r#trait::{CredentialProvider, Notifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The command exited with status 0.
    Succeeded,
    /// Neither stream produced a line.
    NoOutput,
    /// The config has no entry for the notifier's channel.
    NoChannel,
    /// No credential for the notifier's channel.
    NoCredential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Skipped(SkipReason),
    Sent { delivered: usize, failed: usize },
}

impl DispatchOutcome {
    pub fn attempted(&self) -> usize {
        match self {
            DispatchOutcome::Skipped(_) => 0,
            DispatchOutcome::Sent { delivered, failed } => delivered + failed,
        }
    }
}

/// Posts the failure report of `result` to every configured recipient.
///
/// Sends happen one recipient at a time; a failed send is logged and the
/// remaining recipients are still tried.
pub async fn dispatch(
    invocation: &Invocation,
    result: &RunResult,
    channels: &ChannelConfig,
    credentials: &dyn CredentialProvider,
    notifier: &dyn Notifier,
) -> DispatchOutcome {
    let channel = notifier.channel();

    if result.is_success() {
        return DispatchOutcome::Skipped(SkipReason::Succeeded);
    }
    if !result.has_output() {
        tracing::debug!(target: "boom.notify", exit_code = result.exit_code, "nothing captured, not notifying");
        return DispatchOutcome::Skipped(SkipReason::NoOutput);
    }
    let Some(recipients) = channels.recipients(channel) else {
        tracing::debug!(target: "boom.notify", channel, "channel not configured");
        return DispatchOutcome::Skipped(SkipReason::NoChannel);
    };
    let Some(token) = credentials.token(channel) else {
        tracing::debug!(target: "boom.notify", channel, "no credential, not notifying");
        return DispatchOutcome::Skipped(SkipReason::NoCredential);
    };

    let text = format_report(invocation, &result.stdout_tail, &result.stderr_tail);
    let mut delivered = 0;
    let mut failed = 0;

    for recipient in recipients {
        match notifier.send(&token, recipient, &text).await {
            Ok(()) => {
                delivered += 1;
                tracing::info!(target: "boom.notify", channel, recipient = %recipient, "report sent");
            }
            Err(e) => {
                failed += 1;
                tracing::warn!(target: "boom.notify", channel, recipient = %recipient, error = %e, "report not delivered");
            }
        }
    }

    DispatchOutcome::Sent { delivered, failed }
}
