//! Prompt comparison queries.

use crate::pool::{now_timestamp, DbError, DbPool, DbResult};
use rusqlite::{params, Row};

/// Saved comparison row from database.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub id: String,
    pub title: String,
    pub prompt_a: String,
    pub prompt_b: String,
    /// Raw JSON text.
    pub metadata: Option<String>,
    pub project_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

const COLUMNS: &str =
    "id, title, prompt_a, prompt_b, metadata, project_id, created_at, updated_at";

fn map_row(row: &Row<'_>) -> rusqlite::Result<ComparisonRow> {
    Ok(ComparisonRow {
        id: row.get(0)?,
        title: row.get(1)?,
        prompt_a: row.get(2)?,
        prompt_b: row.get(3)?,
        metadata: row.get(4)?,
        project_id: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

/// Create a new comparison.
pub fn create_comparison(
    pool: &DbPool,
    id: &str,
    title: &str,
    prompt_a: &str,
    prompt_b: &str,
    metadata: Option<&str>,
    project_id: Option<&str>,
) -> DbResult<()> {
    let now = now_timestamp();
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO prompt_comparisons
                (id, title, prompt_a, prompt_b, metadata, project_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
            params![id, title, prompt_a, prompt_b, metadata, project_id, now],
        )?;
        Ok(())
    })
}

/// Get a comparison by ID.
pub fn get_comparison(pool: &DbPool, id: &str) -> DbResult<ComparisonRow> {
    pool.with_conn(|conn| {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM prompt_comparisons WHERE id = ?1"),
            params![id],
            map_row,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => DbError::NotFound(format!("Comparison: {}", id)),
            e => DbError::Connection(e),
        })
    })
}

/// List all comparisons, most recently updated first.
pub fn list_comparisons(pool: &DbPool) -> DbResult<Vec<ComparisonRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM prompt_comparisons ORDER BY updated_at DESC, rowid DESC"
        ))?;

        let rows = stmt.query_map([], map_row)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })
}

/// List comparisons belonging to a project, most recently updated first.
pub fn list_comparisons_by_project(pool: &DbPool, project_id: &str) -> DbResult<Vec<ComparisonRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM prompt_comparisons WHERE project_id = ?1
             ORDER BY updated_at DESC, rowid DESC"
        ))?;

        let rows = stmt.query_map(params![project_id], map_row)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })
}

/// Write every mutable column of `row`, bumping `updated_at`.
pub fn update_comparison(pool: &DbPool, row: &ComparisonRow) -> DbResult<()> {
    let now = now_timestamp();
    pool.with_conn(|conn| {
        let changed = conn.execute(
            "UPDATE prompt_comparisons
             SET title = ?1, prompt_a = ?2, prompt_b = ?3, metadata = ?4, project_id = ?5,
                 updated_at = ?6
             WHERE id = ?7",
            params![
                row.title,
                row.prompt_a,
                row.prompt_b,
                row.metadata,
                row.project_id,
                now,
                row.id
            ],
        )?;
        if changed == 0 {
            return Err(DbError::NotFound(format!("Comparison: {}", row.id)));
        }
        Ok(())
    })
}

/// Delete a comparison. Returns `false` when no comparison had this ID.
pub fn delete_comparison(pool: &DbPool, id: &str) -> DbResult<bool> {
    pool.with_conn(|conn| {
        let changed = conn.execute("DELETE FROM prompt_comparisons WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::run_migrations;
    use crate::queries::projects;

    fn pool() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        run_migrations(&pool).unwrap();
        pool
    }

    #[test]
    fn test_create_and_get() {
        let pool = pool();
        create_comparison(&pool, "c1", "Tone", "be formal", "be casual", Some(r#"{"similarity":33}"#), None)
            .unwrap();

        let row = get_comparison(&pool, "c1").unwrap();
        assert_eq!(row.title, "Tone");
        assert_eq!(row.prompt_b, "be casual");
        assert_eq!(row.metadata.as_deref(), Some(r#"{"similarity":33}"#));
        assert!(row.project_id.is_none());
    }

    #[test]
    fn test_unknown_project_rejected() {
        let pool = pool();
        let result = create_comparison(&pool, "c1", "t", "a", "b", None, Some("missing"));
        assert!(matches!(result, Err(DbError::Connection(_))));
    }

    #[test]
    fn test_list_by_project() {
        let pool = pool();
        projects::create_project(&pool, "p1", "One", None).unwrap();
        projects::create_project(&pool, "p2", "Two", None).unwrap();
        create_comparison(&pool, "c1", "first", "a", "b", None, Some("p1")).unwrap();
        create_comparison(&pool, "c2", "second", "a", "b", None, Some("p2")).unwrap();
        create_comparison(&pool, "c3", "third", "a", "b", None, Some("p1")).unwrap();
        create_comparison(&pool, "c4", "loose", "a", "b", None, None).unwrap();

        let ids: Vec<_> = list_comparisons_by_project(&pool, "p1")
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["c3", "c1"]);
        assert_eq!(list_comparisons(&pool).unwrap().len(), 4);
    }

    #[test]
    fn test_update() {
        let pool = pool();
        create_comparison(&pool, "c1", "draft", "a", "b", None, None).unwrap();
        let mut row = get_comparison(&pool, "c1").unwrap();
        row.title = "final".to_string();
        row.prompt_a = "changed".to_string();
        update_comparison(&pool, &row).unwrap();

        let stored = get_comparison(&pool, "c1").unwrap();
        assert_eq!(stored.title, "final");
        assert_eq!(stored.prompt_a, "changed");
        assert!(stored.updated_at >= stored.created_at);

        row.id = "missing".to_string();
        assert!(matches!(update_comparison(&pool, &row), Err(DbError::NotFound(_))));
    }

    #[test]
    fn test_project_delete_cascades() {
        let pool = pool();
        projects::create_project(&pool, "p1", "One", None).unwrap();
        create_comparison(&pool, "c1", "t", "a", "b", None, Some("p1")).unwrap();
        create_comparison(&pool, "c2", "t", "a", "b", None, None).unwrap();

        assert!(projects::delete_project(&pool, "p1").unwrap());
        assert!(matches!(get_comparison(&pool, "c1"), Err(DbError::NotFound(_))));
        assert!(get_comparison(&pool, "c2").is_ok());
    }

    #[test]
    fn test_delete() {
        let pool = pool();
        create_comparison(&pool, "c1", "t", "a", "b", None, None).unwrap();
        assert!(delete_comparison(&pool, "c1").unwrap());
        assert!(!delete_comparison(&pool, "c1").unwrap());
    }
}
