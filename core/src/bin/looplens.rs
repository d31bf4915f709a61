//! looplens CLI
//!
//! Renders the sample program in the terminal and steps through it, either
//! automatically or one line at a time.

use looplens_core::cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Frames go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run_cli().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
