//! Tablegraph CLI binary.

use anyhow::Result;
use tablegraph::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the tablegraph CLI.
///
/// Uses tokio's current_thread runtime: the work is one file read and a few
/// sequential HTTP calls.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for --json.
    // Example: RUST_LOG=tablegraph=debug,tablegraph_csv=trace tablegraph info
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tablegraph=info,tablegraph_csv=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting tablegraph CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Tablegraph CLI completed successfully");
    Ok(())
}
