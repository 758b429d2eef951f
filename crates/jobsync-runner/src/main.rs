use clap::Parser;
use tracing::{error, info};

mod fetch;
mod sync;

use jobsync_core::SyncConfig;

/// Sync the latest job listings into today's spreadsheet tab.
#[derive(Parser, Debug)]
#[command(name = "jobsync", version)]
struct Args {
    /// Optional TOML config file; env vars override it.
    #[arg(long)]
    config: Option<String>,

    /// Fetch and report, but write nothing to the spreadsheet.
    #[arg(long)]
    dry_run: bool,

    /// Log level when RUST_LOG is unset (error|warn|info|debug).
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("jobsync={}", args.log_level).into()),
        )
        .init();

    let config = SyncConfig::load(args.config.as_deref())?;
    config.validate()?;

    // Outermost boundary: any step failing ends the run with a log line and
    // a nonzero exit so the external scheduler can tell runs apart.
    match sync::run_sync(&config, args.dry_run).await {
        Ok(summary) => {
            info!(summary = %serde_json::to_string(&summary)?, "run complete");
            Ok(())
        }
        Err(e) => {
            error!(code = e.code(), error = %e, "run failed");
            std::process::exit(1);
        }
    }
}
