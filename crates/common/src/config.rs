//! Environment-driven service configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the working directory.

use std::{env, path::PathBuf};

use thiserror::Error;

pub const MONGO_URI: &str = "MONGO_URI";
pub const MONGO_DB: &str = "MONGO_DB";
pub const PORT: &str = "PORT";
pub const BIND_ADDRESS: &str = "BIND_ADDRESS";

pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Per-service fallbacks for variables that are not set.
#[derive(Debug, Clone, Copy)]
pub struct ServiceDefaults {
    /// `None` makes `MONGO_DB` mandatory.
    pub mongo_db: Option<&'static str>,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub mongo_uri: String,
    pub mongo_db: String,
    pub bind_address: String,
    pub port: u16,
}

impl ServiceConfig {
    pub fn from_env(defaults: ServiceDefaults) -> Result<Self, ConfigError> {
        Self::from_lookup(defaults, |key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(defaults: ServiceDefaults, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mongo_uri = get(MONGO_URI).unwrap_or_else(|| DEFAULT_MONGO_URI.to_string());

        let mongo_db = match (get(MONGO_DB), defaults.mongo_db) {
            (Some(db), _) => db,
            (None, Some(fallback)) => fallback.to_string(),
            (None, None) => return Err(ConfigError::Missing(MONGO_DB)),
        };

        let port = match get(PORT) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: PORT,
                value: raw,
            })?,
            None => defaults.port,
        };

        let bind_address = get(BIND_ADDRESS).unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            mongo_uri,
            mongo_db,
            bind_address,
            port,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// Load `.env` if present. Returns the path that was read.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const GOALS: ServiceDefaults = ServiceDefaults {
        mongo_db: Some("goals"),
        port: 5020,
    };

    const ANALYTICS: ServiceDefaults = ServiceDefaults {
        mongo_db: None,
        port: 5050,
    };

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = ServiceConfig::from_lookup(GOALS, lookup(&[])).unwrap();
        assert_eq!(config.mongo_uri, DEFAULT_MONGO_URI);
        assert_eq!(config.mongo_db, "goals");
        assert_eq!(config.port, 5020);
        assert_eq!(config.listen_addr(), "0.0.0.0:5020");
    }

    #[test]
    fn test_environment_overrides() {
        let config = ServiceConfig::from_lookup(
            GOALS,
            lookup(&[
                (MONGO_URI, "mongodb://root:password@db:27017"),
                (MONGO_DB, "goal_database"),
                (PORT, "8080"),
                (BIND_ADDRESS, "127.0.0.1"),
            ]),
        )
        .unwrap();
        assert_eq!(config.mongo_uri, "mongodb://root:password@db:27017");
        assert_eq!(config.mongo_db, "goal_database");
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_missing_required_database() {
        let err = ServiceConfig::from_lookup(ANALYTICS, lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(MONGO_DB));
    }

    #[test]
    fn test_blank_database_counts_as_missing() {
        let err = ServiceConfig::from_lookup(ANALYTICS, lookup(&[(MONGO_DB, "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(MONGO_DB));
    }

    #[test]
    fn test_invalid_port() {
        let err = ServiceConfig::from_lookup(GOALS, lookup(&[(PORT, "http")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: PORT,
                value: "http".to_string()
            }
        );
    }
}
