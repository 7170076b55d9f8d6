//! Saved prompt comparisons.

pub mod model;

use crate::error::{PcmpError, PcmpResult};
use model::{ComparisonMetadata, ComparisonUpdate, NewComparison, PromptComparison};
use pcmp_db::queries::comparisons::{self as queries, ComparisonRow};
use pcmp_db::queries::projects;
use pcmp_db::{DbError, DbPool};
use tracing::{debug, info};
use uuid::Uuid;

/// Save a new comparison, deriving metadata when none is given.
pub fn create_comparison(pool: &DbPool, input: NewComparison) -> PcmpResult<PromptComparison> {
    let title = validate_title(&input.title)?;
    if let Some(project_id) = &input.project_id {
        ensure_project(pool, project_id)?;
    }

    let metadata = match &input.metadata {
        Some(value) => serde_json::to_string(value)?,
        None => serde_json::to_string(&ComparisonMetadata::derive(&input.prompt_a, &input.prompt_b))?,
    };

    let id = Uuid::new_v4().to_string();
    queries::create_comparison(
        pool,
        &id,
        title,
        &input.prompt_a,
        &input.prompt_b,
        Some(&metadata),
        input.project_id.as_deref(),
    )?;
    info!(comparison_id = %id, project_id = ?input.project_id, "Comparison saved");

    get_comparison(pool, &id)
}

/// Get a comparison by ID.
pub fn get_comparison(pool: &DbPool, id: &str) -> PcmpResult<PromptComparison> {
    Ok(PromptComparison::from_row(fetch_row(pool, id)?))
}

/// List comparisons, optionally restricted to one project.
pub fn list_comparisons(pool: &DbPool, project_id: Option<&str>) -> PcmpResult<Vec<PromptComparison>> {
    let rows = match project_id {
        Some(project_id) => queries::list_comparisons_by_project(pool, project_id)?,
        None => queries::list_comparisons(pool)?,
    };
    Ok(rows.into_iter().map(PromptComparison::from_row).collect())
}

/// Apply a partial update.
///
/// When a prompt changes and the update carries no metadata, the stored
/// metadata is derived again from the new prompts.
pub fn update_comparison(pool: &DbPool, id: &str, update: ComparisonUpdate) -> PcmpResult<PromptComparison> {
    let mut row = fetch_row(pool, id)?;

    if let Some(title) = &update.title {
        row.title = validate_title(title)?.to_string();
    }

    let prompts_changed = update.prompt_a.as_ref().is_some_and(|a| *a != row.prompt_a)
        || update.prompt_b.as_ref().is_some_and(|b| *b != row.prompt_b);
    if let Some(prompt_a) = update.prompt_a {
        row.prompt_a = prompt_a;
    }
    if let Some(prompt_b) = update.prompt_b {
        row.prompt_b = prompt_b;
    }

    match update.metadata {
        Some(metadata) => {
            row.metadata = metadata.as_ref().map(serde_json::to_string).transpose()?;
        }
        None if prompts_changed => {
            debug!(comparison_id = %id, "Prompts changed, deriving metadata");
            let derived = ComparisonMetadata::derive(&row.prompt_a, &row.prompt_b);
            row.metadata = Some(serde_json::to_string(&derived)?);
        }
        None => {}
    }

    if let Some(project_id) = update.project_id {
        if let Some(project_id) = &project_id {
            ensure_project(pool, project_id)?;
        }
        row.project_id = project_id;
    }

    queries::update_comparison(pool, &row)?;
    info!(comparison_id = %id, "Comparison updated");

    get_comparison(pool, id)
}

/// Delete a comparison.
pub fn delete_comparison(pool: &DbPool, id: &str) -> PcmpResult<()> {
    if !queries::delete_comparison(pool, id)? {
        return Err(PcmpError::ComparisonNotFound(id.to_string()));
    }
    info!(comparison_id = %id, "Comparison deleted");
    Ok(())
}

fn fetch_row(pool: &DbPool, id: &str) -> PcmpResult<ComparisonRow> {
    queries::get_comparison(pool, id).map_err(|e| match e {
        DbError::NotFound(_) => PcmpError::ComparisonNotFound(id.to_string()),
        e => e.into(),
    })
}

fn ensure_project(pool: &DbPool, project_id: &str) -> PcmpResult<()> {
    if projects::project_exists(pool, project_id)? {
        Ok(())
    } else {
        Err(PcmpError::validation(format!("Unknown project: {}", project_id)))
    }
}

fn validate_title(title: &str) -> PcmpResult<&str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(PcmpError::validation("Comparison title must not be empty"));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project;
    use serde_json::json;

    fn pool() -> DbPool {
        pcmp_db::init_memory_pool().unwrap()
    }

    fn new_comparison(title: &str, a: &str, b: &str) -> NewComparison {
        NewComparison {
            title: title.to_string(),
            prompt_a: a.to_string(),
            prompt_b: b.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_derives_metadata() {
        let pool = pool();
        let saved = create_comparison(&pool, new_comparison("Pets", "cat dog", "dog bird")).unwrap();

        let metadata = saved.derived_metadata().unwrap();
        assert_eq!(metadata.similarity, 33);
        assert_eq!(metadata.stats_a.words, 2);
        assert_eq!(saved.metadata.as_ref().unwrap()["statsB"]["chars"], 8);
    }

    #[test]
    fn test_create_keeps_client_metadata() {
        let pool = pool();
        let input = NewComparison {
            metadata: Some(json!({"note": "from client"})),
            ..new_comparison("Custom", "a", "b")
        };
        let saved = create_comparison(&pool, input).unwrap();
        assert_eq!(saved.metadata, Some(json!({"note": "from client"})));
        assert!(saved.derived_metadata().is_none());
    }

    #[test]
    fn test_validation() {
        let pool = pool();
        let err = create_comparison(&pool, new_comparison(" ", "a", "b")).unwrap_err();
        assert!(matches!(err, PcmpError::ValidationError(_)));

        let input = NewComparison {
            project_id: Some("missing".to_string()),
            ..new_comparison("Orphan", "a", "b")
        };
        let err = create_comparison(&pool, input).unwrap_err();
        assert!(matches!(err, PcmpError::ValidationError(_)));
    }

    #[test]
    fn test_list_filters_by_project() {
        let pool = pool();
        let project = project::create_project(&pool, "Agents", None).unwrap();
        let input = NewComparison {
            project_id: Some(project.id.clone()),
            ..new_comparison("In project", "a", "b")
        };
        create_comparison(&pool, input).unwrap();
        create_comparison(&pool, new_comparison("Loose", "a", "b")).unwrap();

        let scoped = list_comparisons(&pool, Some(&project.id)).unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].title, "In project");
        assert_eq!(list_comparisons(&pool, None).unwrap().len(), 2);
    }

    #[test]
    fn test_update_rederives_on_prompt_change() {
        let pool = pool();
        let saved = create_comparison(&pool, new_comparison("Draft", "same words", "same words")).unwrap();
        assert_eq!(saved.derived_metadata().unwrap().similarity, 100);

        let updated = update_comparison(
            &pool,
            &saved.id,
            ComparisonUpdate {
                prompt_b: Some("other text".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.prompt_b, "other text");
        assert_eq!(updated.title, "Draft");
        assert_eq!(updated.derived_metadata().unwrap().similarity, 0);
    }

    #[test]
    fn test_update_clears_fields() {
        let pool = pool();
        let project = project::create_project(&pool, "Agents", None).unwrap();
        let input = NewComparison {
            project_id: Some(project.id),
            ..new_comparison("Draft", "a", "b")
        };
        let saved = create_comparison(&pool, input).unwrap();

        let updated = update_comparison(
            &pool,
            &saved.id,
            ComparisonUpdate {
                title: Some("Final".to_string()),
                metadata: Some(None),
                project_id: Some(None),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.title, "Final");
        assert!(updated.metadata.is_none());
        assert!(updated.project_id.is_none());
    }

    #[test]
    fn test_missing_comparison() {
        let pool = pool();
        assert!(get_comparison(&pool, "missing").unwrap_err().is_not_found());
        assert!(update_comparison(&pool, "missing", ComparisonUpdate::default())
            .unwrap_err()
            .is_not_found());
        assert!(delete_comparison(&pool, "missing").unwrap_err().is_not_found());
    }

    #[test]
    fn test_deleting_project_removes_comparisons() {
        let pool = pool();
        let project = project::create_project(&pool, "Temp", None).unwrap();
        let input = NewComparison {
            project_id: Some(project.id.clone()),
            ..new_comparison("Inside", "a", "b")
        };
        let saved = create_comparison(&pool, input).unwrap();

        project::delete_project(&pool, &project.id).unwrap();
        assert!(get_comparison(&pool, &saved.id).unwrap_err().is_not_found());
    }
}
