//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{self, Overrides, ResolvedConfig};

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PCMP_PORT")]
    pub port: Option<u16>,

    /// Host to bind to
    #[arg(long, env = "PCMP_HOST")]
    pub host: Option<String>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to .pcmp/serve.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, config: ResolvedConfig) -> Result<()> {
    let config = config::apply_overrides(
        config,
        Overrides {
            host: args.host,
            port: args.port,
            ..Default::default()
        },
    );
    let pool = Arc::new(super::open_db(&config)?);

    println!();
    println!("  {} {}", "Prompt Compare".cyan().bold(), "API Server".bold());
    println!();
    println!("  {}       http://{}:{}/api", "API".green(), config.host, config.port);
    println!("  {}  {}", "Database".green(), config.database.display());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    pcmp_web::run_server(pool, &config.host, config.port).await?;

    Ok(())
}
