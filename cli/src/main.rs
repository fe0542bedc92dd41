use clap::Parser;
mod app;
mod commands;
use commands::cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Diagnostics share stderr with the wrapped command, so stay quiet by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();

    if let Some(exit) = app::run_app(args).await {
        std::process::exit(exit);
    }
}
