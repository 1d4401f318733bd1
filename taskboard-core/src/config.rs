//! Database connection settings - environment loading and URL assembly
//!
//! Settings are loaded from environment variables (a `.env` file is
//! honored when present):
//! - `DB_HOST`: database server host
//! - `DB_PORT`: database server port (u16)
//! - `DB_NAME`: database name
//! - `DB_USER`: database user
//! - `DB_PASSWORD`: database password
//!
//! All five are required. Loading fails on the first missing or empty
//! variable; no defaults are substituted.

use std::env;
use std::fmt;

use crate::error::{CoreError, Result};

/// Environment variable for the database host
pub const DB_HOST: &str = "DB_HOST";
/// Environment variable for the database port
pub const DB_PORT: &str = "DB_PORT";
/// Environment variable for the database name
pub const DB_NAME: &str = "DB_NAME";
/// Environment variable for the database user
pub const DB_USER: &str = "DB_USER";
/// Environment variable for the database password
pub const DB_PASSWORD: &str = "DB_PASSWORD";

/// Database connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl DbSettings {
    /// Load settings from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if one
    /// exists; real environment variables take precedence over it.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending variable if any of the
    /// five is missing, empty, or (for `DB_PORT`) not a valid port.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build settings from an arbitrary lookup (for testing, or for
    /// settings providers other than the process environment).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = require(&lookup, DB_HOST)?;
        let port = require(&lookup, DB_PORT)?;
        let name = require(&lookup, DB_NAME)?;
        let user = require(&lookup, DB_USER)?;
        let password = require(&lookup, DB_PASSWORD)?;

        let port = port
            .parse::<u16>()
            .map_err(|e| CoreError::invalid_port(port.clone(), e.to_string()))?;

        let settings = Self {
            host,
            port,
            name,
            user,
            password,
        };

        tracing::info!(
            host = %settings.host,
            port = settings.port,
            database = %settings.name,
            user = %settings.user,
            "database settings loaded"
        );

        Ok(settings)
    }

    /// Assemble the connection URL.
    ///
    /// Format: `postgres://{user}:{password}@{host}:{port}/{name}`
    ///
    /// Fields are substituted as-is, in fixed order. No percent-encoding
    /// is applied: a credential containing URL-significant characters
    /// produces a malformed URL, and the failure surfaces from the
    /// driver when a connection is first attempted.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

// Password stays out of logs and error output.
impl fmt::Debug for DbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

fn require<F>(lookup: &F, name: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if value.is_empty() => Err(CoreError::empty_var(name)),
        Some(value) => Ok(value),
        None => Err(CoreError::missing_var(name)),
    }
}
