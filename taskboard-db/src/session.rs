//! Unit-of-work sessions
//!
//! A [`Session`] wraps one database transaction. Auto-commit is
//! disabled by construction: nothing a session writes becomes visible
//! to other sessions unless the caller invokes [`Session::commit`].
//! Dropping a session without committing rolls its work back.

use sqlx::postgres::PgConnection;
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::DbResult;

/// Produces sessions on demand, bound to one engine's pool.
#[derive(Clone)]
pub struct SessionFactory {
    pool: PgPool,
}

impl SessionFactory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a new session.
    ///
    /// Begins a transaction on a pooled connection. This is where a
    /// lazily-constructed engine first talks to the server, so
    /// connection and authentication failures surface here.
    pub async fn session(&self) -> DbResult<Session> {
        let tx = self.pool.begin().await?;
        tracing::debug!("session opened");
        Ok(Session { tx })
    }
}

/// One unit of work.
pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    /// The session's connection, for executing statements inside the
    /// unit of work.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    /// Finalize the unit of work.
    pub async fn commit(self) -> DbResult<()> {
        self.tx.commit().await?;
        tracing::debug!("session committed");
        Ok(())
    }

    /// Discard the unit of work.
    ///
    /// Dropping an uncommitted session has the same effect; the
    /// explicit form exists to surface rollback errors.
    pub async fn rollback(self) -> DbResult<()> {
        self.tx.rollback().await?;
        tracing::debug!("session rolled back");
        Ok(())
    }
}
