//! Entity definitions for the taskboard schema
//!
//! Projects, and the kanban tasks that belong to them.

mod project;
mod task;

pub use project::Project;
pub use task::{Task, TaskPriority, TaskStatus};

use crate::error::DbResult;
use crate::registry::EntityRegistry;

/// Registry with every taskboard entity registered, in dependency
/// order (projects before the tasks that reference them).
pub fn registry() -> DbResult<EntityRegistry> {
    let mut registry = EntityRegistry::new();
    registry.register::<Project>()?;
    registry.register::<Task>()?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Database;
    use taskboard_core::DbSettings;

    #[test]
    fn registry_holds_both_entities_in_dependency_order() {
        let registry = registry().expect("registry");

        let tables: Vec<_> = registry.entities().iter().map(|e| e.table_name).collect();
        assert_eq!(tables, vec!["projects", "tasks"]);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn schema_round_trip() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let settings = DbSettings::from_env().expect("DB_* variables required");
        let db = Database::connect_lazy(&settings).expect("engine");

        registry()
            .expect("registry")
            .create_all(db.pool())
            .await
            .expect("create_all");

        // Unique name per run; the projects table may already hold data.
        let mut project =
            Project::new("website-redesign", Some("Q3 marketing site".into()));
        project.name = format!("website-redesign-{}", project.id);
        let task = Task::new(project.id, "Design new homepage layout");

        let mut session = db.session_factory().session().await.expect("session");
        sqlx::query(
            "INSERT INTO projects (id, name, description, color, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(project.id)
        .bind(&project.name)
        .bind(&project.description)
        .bind(&project.color)
        .bind(project.created_at)
        .execute(session.conn())
        .await
        .expect("insert project");

        sqlx::query(
            "INSERT INTO tasks \
             (id, project_id, title, description, status, priority, assignee, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(task.id)
        .bind(project.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(task.priority.as_str())
        .bind(&task.assignee)
        .bind(task.created_at)
        .bind(task.updated_at)
        .execute(session.conn())
        .await
        .expect("insert task");
        session.commit().await.expect("commit");

        let mut session = db.session_factory().session().await.expect("session");
        let fetched: Task = sqlx::query_as("SELECT * FROM tasks WHERE id = $1")
            .bind(task.id)
            .fetch_one(session.conn())
            .await
            .expect("fetch task");

        assert_eq!(fetched.title, task.title);
        assert_eq!(fetched.status, TaskStatus::Todo);
        assert_eq!(fetched.priority, TaskPriority::Medium);
    }
}
