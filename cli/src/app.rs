use boom_core::api::{dispatch, run, ChannelConfig, DispatchOutcome, Invocation, RunConfig, RunResult};
use boom_plugins::{build_services, Services};

use crate::cli::Args;

/// Runs the wrapped command and reports a failure.
///
/// Returns the exit code to terminate with, or `None` when no command was given.
pub async fn run_app(args: Args) -> Option<i32> {
    let cfg = args.run_config();
    let Some(invocation) = Invocation::from_args(args.command) else {
        tracing::debug!(target: "boom.app", "no command given, nothing to do");
        return None;
    };

    let services = match build_services(&cfg) {
        Ok(services) => Some(services),
        Err(e) => {
            tracing::warn!(target: "boom.app", error = %e, "notification disabled: could not build services");
            None
        }
    };

    let result = run_and_report(&invocation, &cfg, services.as_ref()).await;
    Some(result.exit_code)
}

pub(crate) async fn run_and_report(
    invocation: &Invocation,
    cfg: &RunConfig,
    services: Option<&Services>,
) -> RunResult {
    let channels = services
        .map(|s| s.config.load())
        .unwrap_or_else(ChannelConfig::default);

    let result = run(invocation, cfg.tail_lines).await;

    if let Some(services) = services {
        let outcome = dispatch(
            invocation,
            &result,
            &channels,
            services.credentials.as_ref(),
            services.notifier.as_ref(),
        )
        .await;
        if let DispatchOutcome::Sent { delivered, failed } = outcome {
            tracing::info!(target: "boom.app", delivered, failed, "failure report dispatched");
        }
    }

    result
}
