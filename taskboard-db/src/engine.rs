//! Database engine handle
//!
//! Wraps a sqlx PgPool configured from [`DbSettings`]. The pool is
//! lazy: constructing the handle performs no I/O, and an unreachable
//! or misconfigured server surfaces as a driver error from the first
//! session that touches it.

use log::LevelFilter;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use taskboard_core::DbSettings;

use crate::error::DbResult;
use crate::session::SessionFactory;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Engine construction options
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Log every executed statement at INFO.
    ///
    /// On by default, matching the deliberate always-echo configuration
    /// of this layer. When off, statements still log at DEBUG for
    /// targeted troubleshooting.
    pub echo: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            echo: true,
        }
    }
}

/// Pool counters, sampled at call time
#[derive(Debug, Clone, Copy)]
pub struct PoolStats {
    /// Total connections currently in the pool
    pub size: u32,
    /// Connections currently idle
    pub idle: u32,
}

/// The engine handle: one configured connection target per process.
///
/// Cheap to clone (clones share the pool). Construct it once from
/// explicit settings and pass it through call chains; there is no
/// implicit global.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create the engine handle from settings with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if the assembled connection URL is rejected by
    /// the driver (for example, credentials containing characters the
    /// URL grammar does not allow).
    pub fn connect_lazy(settings: &DbSettings) -> DbResult<Self> {
        Self::connect_lazy_with(settings, EngineOptions::default())
    }

    /// Create the engine handle with explicit options.
    pub fn connect_lazy_with(settings: &DbSettings, options: EngineOptions) -> DbResult<Self> {
        let statement_level = if options.echo {
            LevelFilter::Info
        } else {
            LevelFilter::Debug
        };

        let connect = settings
            .database_url()
            .parse::<PgConnectOptions>()?
            .log_statements(statement_level);

        let pool = PgPoolOptions::new()
            .max_connections(options.max_connections)
            .connect_lazy_with(connect);

        tracing::info!(
            host = %settings.host,
            port = settings.port,
            database = %settings.name,
            max_connections = options.max_connections,
            echo = options.echo,
            "database engine configured"
        );

        Ok(Self { pool })
    }

    /// Borrow the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Session factory bound to this engine.
    pub fn session_factory(&self) -> SessionFactory {
        SessionFactory::new(self.pool.clone())
    }

    /// Health probe: round-trip a `SELECT 1`.
    ///
    /// This is the first point at which an unreachable database or an
    /// authentication failure becomes observable.
    pub async fn ping(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Current pool counters.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            size: self.pool.size(),
            idle: self.pool.num_idle() as u32,
        }
    }

    /// Close the pool, waiting for connections to be released.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database engine closed");
    }
}
