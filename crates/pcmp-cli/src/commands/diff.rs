//! Positional diff command.

use anyhow::Result;
use clap::Args;
use pcmp_analytics::highlight_pair;
use std::path::PathBuf;

use crate::output;

#[derive(Args)]
pub struct DiffArgs {
    /// First prompt file (`-` for stdin)
    pub a: PathBuf,

    /// Second prompt file (`-` for stdin)
    pub b: PathBuf,
}

pub fn execute(args: DiffArgs) -> Result<()> {
    let (prompt_a, prompt_b) = super::read_pair(&args.a, &args.b)?;
    let (a, b) = highlight_pair(&prompt_a, &prompt_b);
    output::print_diff(&a, &b);
    Ok(())
}
