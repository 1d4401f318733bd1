//! taskboard-db: database layer for the taskboard backend
//!
//! Connection engine, unit-of-work sessions, and the entity registry.
//! Construction is explicit and handle-based: load [`DbSettings`] once
//! at startup, build a [`Database`], and pass it through call chains.
//!
//! ```no_run
//! use taskboard_core::DbSettings;
//! use taskboard_db::{entities, Database};
//!
//! # async fn start() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = DbSettings::from_env()?;
//! let db = Database::connect_lazy(&settings)?;
//!
//! entities::registry()?.create_all(db.pool()).await?;
//!
//! let mut session = db.session_factory().session().await?;
//! sqlx::query("SELECT 1").execute(session.conn()).await?;
//! session.commit().await?;
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod entities;
pub mod error;
pub mod registry;
pub mod session;

pub use engine::{Database, EngineOptions, PoolStats};
pub use error::{DbError, DbResult};
pub use registry::{Entity, EntityDef, EntityRegistry};
pub use session::{Session, SessionFactory};

pub use taskboard_core::DbSettings;
