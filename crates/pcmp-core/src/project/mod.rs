//! Project management.

pub mod model;

use crate::error::{PcmpError, PcmpResult};
use model::{Project, ProjectUpdate};
use pcmp_db::queries::projects as queries;
use pcmp_db::{DbError, DbPool};
use tracing::info;
use uuid::Uuid;

/// Create a new project.
pub fn create_project(pool: &DbPool, name: &str, description: Option<&str>) -> PcmpResult<Project> {
    let name = validate_name(name)?;
    let id = Uuid::new_v4().to_string();

    queries::create_project(pool, &id, name, description)?;
    info!(project_id = %id, project_name = name, "Project created");

    get_project(pool, &id)
}

/// Get a project by ID.
pub fn get_project(pool: &DbPool, id: &str) -> PcmpResult<Project> {
    let row = queries::get_project(pool, id).map_err(|e| match e {
        DbError::NotFound(_) => PcmpError::ProjectNotFound(id.to_string()),
        e => e.into(),
    })?;
    Ok(Project::from_row(row))
}

/// List all projects, most recently updated first.
pub fn list_projects(pool: &DbPool) -> PcmpResult<Vec<Project>> {
    let rows = queries::list_projects(pool)?;
    Ok(rows.into_iter().map(Project::from_row).collect())
}

/// Apply a partial update to a project.
pub fn update_project(pool: &DbPool, id: &str, update: ProjectUpdate) -> PcmpResult<Project> {
    let current = get_project(pool, id)?;

    let name = match &update.name {
        Some(name) => validate_name(name)?.to_string(),
        None => current.name,
    };
    let description = update.description.unwrap_or(current.description);

    queries::update_project(pool, id, &name, description.as_deref())?;
    info!(project_id = %id, "Project updated");

    get_project(pool, id)
}

/// Delete a project together with its comparisons.
pub fn delete_project(pool: &DbPool, id: &str) -> PcmpResult<()> {
    if !queries::delete_project(pool, id)? {
        return Err(PcmpError::ProjectNotFound(id.to_string()));
    }
    info!(project_id = %id, "Project deleted");
    Ok(())
}

fn validate_name(name: &str) -> PcmpResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PcmpError::validation("Project name must not be empty"));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> DbPool {
        pcmp_db::init_memory_pool().unwrap()
    }

    #[test]
    fn test_create_project() {
        let pool = pool();
        let project = create_project(&pool, "  Onboarding  ", Some("Welcome prompts")).unwrap();
        assert_eq!(project.name, "Onboarding");
        assert_eq!(project.description.as_deref(), Some("Welcome prompts"));
        assert_eq!(Uuid::parse_str(&project.id).unwrap().get_version_num(), 4);
    }

    #[test]
    fn test_blank_name_rejected() {
        let pool = pool();
        let err = create_project(&pool, "   ", None).unwrap_err();
        assert!(matches!(err, PcmpError::ValidationError(_)));
        assert!(list_projects(&pool).unwrap().is_empty());
    }

    #[test]
    fn test_partial_update() {
        let pool = pool();
        let project = create_project(&pool, "Search", Some("Query rewriting")).unwrap();

        let renamed = update_project(
            &pool,
            &project.id,
            ProjectUpdate {
                name: Some("Search v2".to_string()),
                description: None,
            },
        )
        .unwrap();
        assert_eq!(renamed.name, "Search v2");
        assert_eq!(renamed.description.as_deref(), Some("Query rewriting"));

        let cleared = update_project(
            &pool,
            &project.id,
            ProjectUpdate {
                name: None,
                description: Some(None),
            },
        )
        .unwrap();
        assert_eq!(cleared.name, "Search v2");
        assert!(cleared.description.is_none());
    }

    #[test]
    fn test_missing_project() {
        let pool = pool();
        let err = get_project(&pool, "missing").unwrap_err();
        assert!(matches!(err, PcmpError::ProjectNotFound(_)));
        assert!(err.is_not_found());

        let err = update_project(&pool, "missing", ProjectUpdate::default()).unwrap_err();
        assert!(err.is_not_found());

        let err = delete_project(&pool, "missing").unwrap_err();
        assert!(err.is_not_found());
    }
}
