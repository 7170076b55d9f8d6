//! Token estimate command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pcmp_analytics::{estimate_all, estimate_for_key, get_model, DEFAULT_MODEL};
use std::path::PathBuf;

use crate::config::ResolvedConfig;
use crate::output;

#[derive(Args)]
pub struct EstimateArgs {
    /// Prompt file (`-` for stdin)
    pub file: PathBuf,

    /// Only estimate for this model key
    #[arg(long)]
    pub model: Option<String>,
}

pub fn execute(args: EstimateArgs, config: &ResolvedConfig) -> Result<()> {
    let text = super::read_input(&args.file)?;

    let estimates = match &args.model {
        Some(key) => {
            if get_model(key).is_none() {
                tracing::warn!(model = %key, "Unknown model, using default");
                println!(
                    "{} Unknown model '{}', using {}",
                    "!".yellow(),
                    key,
                    DEFAULT_MODEL.cyan()
                );
            }
            vec![estimate_for_key(&text, key)]
        }
        None => estimate_all(&text),
    };

    println!("{}", "Token Estimate".bold());
    println!();
    output::print_estimates(&estimates, &config.default_model);
    println!();
    println!("{}", "Approximate, based on average tokens per word.".dimmed());

    Ok(())
}
