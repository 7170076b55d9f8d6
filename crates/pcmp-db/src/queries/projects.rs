//! Project-related database queries.

use crate::pool::{now_timestamp, DbError, DbPool, DbResult};
use rusqlite::{params, Row};

/// Project row from database.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

const COLUMNS: &str = "id, name, description, created_at, updated_at";

fn map_row(row: &Row<'_>) -> rusqlite::Result<ProjectRow> {
    Ok(ProjectRow {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

/// Create a new project.
pub fn create_project(pool: &DbPool, id: &str, name: &str, description: Option<&str>) -> DbResult<()> {
    let now = now_timestamp();
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO projects (id, name, description, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)",
            params![id, name, description, now],
        )?;
        Ok(())
    })
}

/// Get a project by ID.
pub fn get_project(pool: &DbPool, id: &str) -> DbResult<ProjectRow> {
    pool.with_conn(|conn| {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM projects WHERE id = ?1"),
            params![id],
            map_row,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => DbError::NotFound(format!("Project: {}", id)),
            e => DbError::Connection(e),
        })
    })
}

/// Whether a project with this ID exists.
pub fn project_exists(pool: &DbPool, id: &str) -> DbResult<bool> {
    pool.with_conn(|conn| {
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM projects WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    })
}

/// List all projects, most recently updated first.
pub fn list_projects(pool: &DbPool) -> DbResult<Vec<ProjectRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM projects ORDER BY updated_at DESC, rowid DESC"
        ))?;

        let rows = stmt.query_map([], map_row)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })
}

/// Overwrite name and description, bumping `updated_at`.
pub fn update_project(
    pool: &DbPool,
    id: &str,
    name: &str,
    description: Option<&str>,
) -> DbResult<()> {
    let now = now_timestamp();
    pool.with_conn(|conn| {
        let changed = conn.execute(
            "UPDATE projects SET name = ?1, description = ?2, updated_at = ?3 WHERE id = ?4",
            params![name, description, now, id],
        )?;
        if changed == 0 {
            return Err(DbError::NotFound(format!("Project: {}", id)));
        }
        Ok(())
    })
}

/// Delete a project and, through the foreign key, its comparisons.
///
/// Returns `false` when no project had this ID.
pub fn delete_project(pool: &DbPool, id: &str) -> DbResult<bool> {
    pool.with_conn(|conn| {
        let changed = conn.execute("DELETE FROM projects WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    })
}
