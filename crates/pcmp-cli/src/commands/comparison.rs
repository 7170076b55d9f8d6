//! Saved comparison commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use pcmp_core::comparison::{self, model::NewComparison};
use std::path::PathBuf;

use crate::config::ResolvedConfig;
use crate::output;

#[derive(Subcommand)]
pub enum ComparisonCommands {
    /// List saved comparisons
    List {
        /// Only comparisons in this project
        #[arg(long)]
        project_id: Option<String>,

        /// Only comparisons whose title contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Save two prompts as a comparison
    Save {
        /// First prompt file (`-` for stdin)
        a: PathBuf,

        /// Second prompt file (`-` for stdin)
        b: PathBuf,

        /// Comparison title
        #[arg(short, long)]
        title: String,

        /// Project to file the comparison under
        #[arg(long)]
        project_id: Option<String>,
    },

    /// Show a saved comparison
    Show {
        /// Comparison ID
        id: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a saved comparison
    Delete {
        /// Comparison ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn execute(cmd: ComparisonCommands, config: &ResolvedConfig) -> Result<()> {
    let db = super::open_db(config)?;

    match cmd {
        ComparisonCommands::List { project_id, search } => {
            let mut comparisons = comparison::list_comparisons(&db, project_id.as_deref())?;
            comparisons.retain(|c| super::matches_search(&c.title, search.as_deref()));
            output::print_comparisons_table(&comparisons);
        }
        ComparisonCommands::Save {
            a,
            b,
            title,
            project_id,
        } => {
            let (prompt_a, prompt_b) = super::read_pair(&a, &b)?;
            let saved = comparison::create_comparison(
                &db,
                NewComparison {
                    title,
                    prompt_a,
                    prompt_b,
                    metadata: None,
                    project_id,
                },
            )?;
            println!("{} Saved comparison: {}", "✓".green(), saved.title.bold());
            println!("  ID: {}", saved.id.dimmed());
        }
        ComparisonCommands::Show { id, json } => {
            let found = comparison::get_comparison(&db, &id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                output::print_comparison(&found);
            }
        }
        ComparisonCommands::Delete { id, yes } => {
            let target = comparison::get_comparison(&db, &id)?;
            let prompt = format!("Delete comparison '{}'?", target.title);
            if !yes && !super::confirm(&prompt)? {
                println!("{}", "Cancelled.".dimmed());
                return Ok(());
            }
            comparison::delete_comparison(&db, &id)?;
            println!("{} Deleted comparison: {}", "✓".green(), target.title);
        }
    }

    Ok(())
}
