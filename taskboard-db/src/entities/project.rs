//! Project entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::registry::Entity;

/// A project grouping related tasks
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Dashboard accent color (CSS class, picked by the frontend)
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create a project with a fresh id and creation timestamp.
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
            color: None,
            created_at: Utc::now(),
        }
    }
}

impl Entity for Project {
    fn table_name() -> &'static str {
        "projects"
    }

    fn create_table_sql() -> &'static str {
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            description TEXT,
            color TEXT,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assigns_distinct_ids() {
        let a = Project::new("a", None);
        let b = Project::new("b", None);
        assert_ne!(a.id, b.id);
    }
}
