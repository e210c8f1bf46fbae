//! docsync CLI
//!
//! Mirrors the remote documentation set into the local `docs` directory and
//! reports what changed. Takes no arguments; one invocation is one pass.

mod commands;
mod error;

use colored::Colorize;
use docsync_core::SyncConfig;
use tracing_subscriber::EnvFilter;

use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so the sync log on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    tracing::debug!("starting sync pass");
    commands::run_sync(SyncConfig::default()).await
}
