//! Compare command.

use anyhow::Result;
use clap::Args;
use pcmp_analytics::{highlight_pair, ComparisonReport};
use std::path::PathBuf;

use crate::output;

#[derive(Args)]
pub struct CompareArgs {
    /// First prompt file (`-` for stdin)
    pub a: PathBuf,

    /// Second prompt file (`-` for stdin)
    pub b: PathBuf,

    /// Also print the highlighted word diff
    #[arg(long)]
    pub highlight: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let (prompt_a, prompt_b) = super::read_pair(&args.a, &args.b)?;
    let report = ComparisonReport::new(&prompt_a, &prompt_b);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::print_report(&report);

    // Highlighting only makes sense when both sides have content.
    if args.highlight && !prompt_a.is_empty() && !prompt_b.is_empty() {
        let (a, b) = highlight_pair(&prompt_a, &prompt_b);
        println!();
        output::print_diff(&a, &b);
    }

    Ok(())
}
