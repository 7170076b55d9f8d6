//! pcmp - Prompt Compare
//!
//! Compare two prompts side by side: stats, similarity, word diff and
//! token cost estimates, with saved comparisons and a REST API.

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

use commands::{Cli, Commands};

const DEFAULT_FILTER: &str = "pcmp=info,pcmp_web=debug,pcmp_core=info";

/// Initialize tracing with optional file logging.
///
/// Console output goes to stderr so command output on stdout stays clean.
/// The returned guard flushes the file writer on drop.
fn init_tracing(log_file: Option<&Path>, verbose: bool) -> Option<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            "pcmp=debug,pcmp_web=debug,pcmp_core=debug,pcmp_db=debug".into()
        } else {
            DEFAULT_FILTER.into()
        }
    });
    let console = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let Some(path) = log_file else {
        tracing_subscriber::registry().with(env_filter).with(console).init();
        return None;
    };

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file_name = path.file_name().unwrap_or("serve.log".as_ref());
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Failed to create log directory {}: {}", dir.display(), e);
    }

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match &cli.command {
        Commands::Serve(args) if args.log => Some(match &args.log_file {
            Some(path) => path.clone(),
            None => cli.project_dir()?.join(config::PROJECT_DIR_NAME).join("serve.log"),
        }),
        _ => None,
    };

    let _guard = init_tracing(log_file.as_deref(), cli.verbose);

    cli.execute().await
}
