//! CLI command definitions and handlers.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::{self, Overrides, ResolvedConfig};

pub mod compare;
pub mod comparison;
pub mod diff;
pub mod estimate;
pub mod export;
pub mod models;
pub mod project;
pub mod serve;

/// Prompt Compare - side-by-side prompt analytics
#[derive(Parser)]
#[command(name = "pcmp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// SQLite database path
    #[arg(long, global = true, env = "PCMP_DB")]
    pub db: Option<PathBuf>,

    /// Model key marked as the default in estimates
    #[arg(long, global = true, env = "PCMP_MODEL")]
    pub default_model: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two prompts: stats, similarity and token estimates
    Compare(compare::CompareArgs),

    /// Show the positional word diff of two prompts
    Diff(diff::DiffArgs),

    /// Estimate tokens and cost for a prompt
    Estimate(estimate::EstimateArgs),

    /// List the pricing catalog
    Models,

    /// Export a comparison as JSON
    Export(export::ExportArgs),

    /// Manage projects
    #[command(subcommand)]
    Project(project::ProjectCommands),

    /// Manage saved comparisons
    #[command(subcommand)]
    Comparison(comparison::ComparisonCommands),

    /// Start the REST API server
    Serve(serve::ServeArgs),
}

impl Cli {
    /// Project directory from `--project`, or the current directory.
    pub fn project_dir(&self) -> Result<PathBuf> {
        match &self.project {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("Failed to resolve current directory"),
        }
    }

    pub async fn execute(self) -> Result<()> {
        let project_dir = self.project_dir()?;
        let overrides = Overrides {
            database: self.db,
            default_model: self.default_model,
            ..Default::default()
        };
        let config = config::resolve(&project_dir, overrides)?;
        tracing::debug!(database = %config.database.display(), "Configuration resolved");

        match self.command {
            Commands::Compare(args) => compare::execute(args),
            Commands::Diff(args) => diff::execute(args),
            Commands::Estimate(args) => estimate::execute(args, &config),
            Commands::Models => models::execute(&config),
            Commands::Export(args) => export::execute(args),
            Commands::Project(cmd) => project::execute(cmd, &config),
            Commands::Comparison(cmd) => comparison::execute(cmd, &config),
            Commands::Serve(args) => serve::execute(args, config).await,
        }
    }
}

/// Read a prompt from a file, or from stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read prompt from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read prompt from {}", path.display()))
}

/// Read both prompts of a comparison. Only one of them may come from stdin.
pub fn read_pair(a: &Path, b: &Path) -> Result<(String, String)> {
    if a == Path::new("-") && b == Path::new("-") {
        bail!("Only one prompt can be read from stdin");
    }
    Ok((read_input(a)?, read_input(b)?))
}

/// Open the configured database, creating and migrating it if needed.
pub fn open_db(config: &ResolvedConfig) -> Result<pcmp_db::DbPool> {
    pcmp_db::init_pool(&config.database)
        .with_context(|| format!("Failed to open database at {}", config.database.display()))
}

/// Case-insensitive substring match. No query, or a blank one, matches everything.
pub fn matches_search(name: &str, query: Option<&str>) -> bool {
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(query) => name.to_lowercase().contains(&query.to_lowercase()),
        None => true,
    }
}

/// Ask a yes/no question on the terminal, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("Failed to read confirmation")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_read_pair_rejects_double_stdin() {
        let err = read_pair(Path::new("-"), Path::new("-")).unwrap_err();
        assert!(err.to_string().contains("stdin"));
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompt.txt");
        std::fs::write(&path, "You are a helpful assistant.\n").unwrap();

        assert_eq!(read_input(&path).unwrap(), "You are a helpful assistant.\n");
        assert!(read_input(&dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_matches_search() {
        assert!(matches_search("Customer Support", Some("support")));
        assert!(matches_search("Customer Support", Some("MER SU")));
        assert!(!matches_search("Customer Support", Some("sales")));
        assert!(matches_search("anything", None));
        assert!(matches_search("anything", Some("  ")));
    }

    #[test]
    fn test_parse_list_search() {
        let cli = Cli::try_parse_from(["pcmp", "project", "list", "--search", "bot"]).unwrap();
        match cli.command {
            Commands::Project(project::ProjectCommands::List { search }) => {
                assert_eq!(search.as_deref(), Some("bot"));
            }
            _ => panic!("expected project list"),
        }
    }

    #[test]
    fn test_parse_compare() {
        let cli = Cli::try_parse_from(["pcmp", "compare", "a.txt", "b.txt", "--highlight"]).unwrap();
        match cli.command {
            Commands::Compare(args) => {
                assert!(args.highlight);
                assert!(!args.json);
                assert_eq!(args.a, PathBuf::from("a.txt"));
            }
            _ => panic!("expected compare"),
        }
    }
}
