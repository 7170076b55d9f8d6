//! Project management commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use pcmp_core::project::{self, model::ProjectUpdate};

use crate::config::ResolvedConfig;
use crate::output;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects
    List {
        /// Only projects whose name contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Create a project
    Create {
        /// Project name
        name: String,

        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Rename or re-describe a project
    Update {
        /// Project ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(short, long, conflicts_with = "clear_description")]
        description: Option<String>,

        /// Remove the description
        #[arg(long)]
        clear_description: bool,
    },

    /// Delete a project and its saved comparisons
    Delete {
        /// Project ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn execute(cmd: ProjectCommands, config: &ResolvedConfig) -> Result<()> {
    let db = super::open_db(config)?;

    match cmd {
        ProjectCommands::List { search } => {
            let mut projects = project::list_projects(&db)?;
            projects.retain(|p| super::matches_search(&p.name, search.as_deref()));
            output::print_projects_table(&projects);
        }
        ProjectCommands::Create { name, description } => {
            let created = project::create_project(&db, &name, description.as_deref())?;
            println!("{} Created project: {}", "✓".green(), created.name.bold());
            println!("  ID: {}", created.id.dimmed());
        }
        ProjectCommands::Update {
            id,
            name,
            description,
            clear_description,
        } => {
            let description = if clear_description {
                Some(None)
            } else {
                description.map(Some)
            };
            let updated = project::update_project(&db, &id, ProjectUpdate { name, description })?;
            println!("{} Updated project: {}", "✓".green(), updated.name.bold());
        }
        ProjectCommands::Delete { id, yes } => {
            let target = project::get_project(&db, &id)?;
            let prompt = format!(
                "Delete project '{}' and all of its saved comparisons?",
                target.name
            );
            if !yes && !super::confirm(&prompt)? {
                println!("{}", "Cancelled.".dimmed());
                return Ok(());
            }
            project::delete_project(&db, &id)?;
            println!("{} Deleted project: {}", "✓".green(), target.name);
        }
    }

    Ok(())
}
