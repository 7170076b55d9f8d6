//! Prompt Compare database layer.
//!
//! SQLite storage for projects and saved prompt comparisons, with
//! embedded schema migrations.

pub mod migrations;
pub mod pool;
pub mod queries;

use std::path::Path;

pub use pool::{DbError, DbPool, DbResult};

/// Open the database at `path` and bring its schema up to date.
pub fn init_pool(path: &Path) -> DbResult<DbPool> {
    let pool = DbPool::open(path)?;
    migrations::run_migrations(&pool)?;
    tracing::info!(path = %path.display(), "Database ready");
    Ok(pool)
}

/// In-memory database with the schema applied.
pub fn init_memory_pool() -> DbResult<DbPool> {
    let pool = DbPool::in_memory()?;
    migrations::run_migrations(&pool)?;
    Ok(pool)
}
