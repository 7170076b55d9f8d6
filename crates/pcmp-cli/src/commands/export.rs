//! Export command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pcmp_analytics::{build_export, EXPORT_FILE_NAME};
use std::path::PathBuf;

#[derive(Args)]
pub struct ExportArgs {
    /// First prompt file (`-` for stdin)
    pub a: PathBuf,

    /// Second prompt file (`-` for stdin)
    pub b: PathBuf,

    /// Output path (`-` for stdout)
    #[arg(short, long, default_value = EXPORT_FILE_NAME)]
    pub output: PathBuf,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let (prompt_a, prompt_b) = super::read_pair(&args.a, &args.b)?;
    let json = build_export(&prompt_a, &prompt_b).to_json_pretty()?;

    if args.output.as_os_str() == "-" {
        println!("{}", json);
        return Ok(());
    }

    std::fs::write(&args.output, json)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("{} Exported to {}", "✓".green(), args.output.display());

    Ok(())
}
