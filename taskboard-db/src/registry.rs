//! Entity registry
//!
//! Entities register explicitly instead of being discovered through a
//! shared base type. The registry keeps registration order, rejects
//! two entities claiming the same table, and can create every
//! registered table at startup.

use sqlx::PgPool;

use crate::error::{DbError, DbResult};

/// Implemented by every persistent entity type.
pub trait Entity {
    /// Table backing this entity.
    fn table_name() -> &'static str;

    /// Idempotent DDL creating the table.
    fn create_table_sql() -> &'static str;
}

/// One registered entity's table description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityDef {
    pub table_name: &'static str,
    pub create_table_sql: &'static str,
}

/// Ordered, collision-checked list of entity definitions.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: Vec<EntityDef>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity type.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::DuplicateEntity`] if an entity for the same
    /// table is already registered.
    pub fn register<E: Entity>(&mut self) -> DbResult<()> {
        let table = E::table_name();

        if self.contains(table) {
            return Err(DbError::DuplicateEntity { table });
        }

        self.entities.push(EntityDef {
            table_name: table,
            create_table_sql: E::create_table_sql(),
        });
        Ok(())
    }

    /// Registered definitions, in registration order.
    pub fn entities(&self) -> &[EntityDef] {
        &self.entities
    }

    pub fn contains(&self, table: &str) -> bool {
        self.entities.iter().any(|e| e.table_name == table)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Create every registered table, in registration order.
    ///
    /// DDL is idempotent, so running this against an existing schema
    /// is safe.
    pub async fn create_all(&self, pool: &PgPool) -> DbResult<()> {
        for def in &self.entities {
            tracing::debug!(table = def.table_name, "ensuring table");
            sqlx::query(def.create_table_sql).execute(pool).await?;
        }

        tracing::info!(tables = self.entities.len(), "schema ensured");
        Ok(())
    }
}
