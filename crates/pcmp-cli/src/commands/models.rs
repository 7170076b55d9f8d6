//! Pricing catalog listing.

use anyhow::Result;
use colored::Colorize;
use pcmp_analytics::all_models;

use crate::config::ResolvedConfig;
use crate::output;

pub fn execute(config: &ResolvedConfig) -> Result<()> {
    println!("{}", "Pricing Models".bold());
    println!();
    output::print_models(all_models(), &config.default_model);
    println!();
    println!("{} default model", "*".green());
    Ok(())
}
