//! Record store configuration parsing from environment variables.

use anyhow::Result;
use std::env;
use std::str::FromStr;

/// Which record store backs the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            _ => anyhow::bail!(
                "Invalid STORAGE_BACKEND: {}. Must be 'sqlite' or 'memory'",
                s
            ),
        }
    }
}

/// Storage environment configuration
#[derive(Debug, Clone)]
pub struct StorageEnvConfig {
    pub backend: StorageBackend,
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for StorageEnvConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            database_url: "sqlite://data/sentipulse.db".to_string(),
            max_connections: 5,
        }
    }
}

impl StorageEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let backend = match env::var("STORAGE_BACKEND") {
            Ok(value) => StorageBackend::from_str(&value)?,
            Err(_) => defaults.backend,
        };

        Ok(Self {
            backend,
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_connections),
        })
    }
}
