//! Process configuration from the environment.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Names the deployment; selects the database.
pub const ENV_VAR: &str = "THING_ENV";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
pub const DATABASE_DIR_VAR: &str = "DATABASE_DIR";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4567";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// In-memory database, discarded at exit.
    Test,
    /// File-backed database named after the environment.
    Named(String),
}

impl Environment {
    /// Parse a designation; blank values are rejected.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim() {
            "" => Err(ConfigError::MissingEnvironment(ENV_VAR)),
            "test" => Ok(Environment::Test),
            name => Ok(Environment::Named(name.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Environment::Test => "test",
            Environment::Named(name) => name,
        }
    }

    pub fn database_url(&self, dir: &Path) -> String {
        match self {
            Environment::Test => "sqlite::memory:".into(),
            Environment::Named(name) => {
                format!("sqlite://{}?mode=rwc", dir.join(format!("{}.db", name)).display())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub bind_addr: SocketAddr,
    pub database_dir: PathBuf,
}

impl AppConfig {
    /// Read `THING_ENV`, `BIND_ADDR` and `DATABASE_DIR` (after loading `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_env = lookup(ENV_VAR).unwrap_or_default();
        let environment = Environment::parse(&raw_env)?;
        let bind_addr = lookup(BIND_ADDR_VAR)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                message: e.to_string(),
            })?;
        let database_dir = lookup(DATABASE_DIR_VAR)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(AppConfig {
            environment,
            bind_addr,
            database_dir,
        })
    }

    pub fn database_url(&self) -> String {
        self.environment.database_url(&self.database_dir)
    }
}
