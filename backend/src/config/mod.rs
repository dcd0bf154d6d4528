//! Application configuration management

use std::env;

use anyhow::{Context, Result, bail};

/// Which document store the server talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDb,
    /// In-process store; data is lost on exit
    Memory,
}

impl StoreBackend {
    pub fn from_arg(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "mongodb" | "mongo" => Some(StoreBackend::MongoDb),
            "memory" => Some(StoreBackend::Memory),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// MongoDB connection string
    pub mongodb_uri: String,

    /// Database holding the `media` and `collections` collections
    pub database_name: String,

    pub store_backend: StoreBackend,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_backend = match lookup("STORE_BACKEND") {
            Some(value) => match StoreBackend::from_arg(&value) {
                Some(backend) => backend,
                None => bail!("Invalid STORE_BACKEND '{}': expected 'mongodb' or 'memory'", value),
            },
            None => StoreBackend::MongoDb,
        };

        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "4000".to_string())
                .parse()
                .context("Invalid PORT")?,

            mongodb_uri: lookup("MONGODB_URI")
                .unwrap_or_else(|| "mongodb://mongodb:27017".to_string()),

            database_name: lookup("DATABASE_NAME").unwrap_or_else(|| "photoShare".to_string()),

            store_backend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.mongodb_uri, "mongodb://mongodb:27017");
        assert_eq!(config.database_name, "photoShare");
        assert_eq!(config.store_backend, StoreBackend::MongoDb);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("MONGODB_URI", "mongodb://localhost:27017"),
            ("DATABASE_NAME", "photos_test"),
            ("STORE_BACKEND", "Memory"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "photos_test");
        assert_eq!(config.store_backend, StoreBackend::Memory);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Config::from_lookup(lookup(&[("PORT", "not-a-port")])).is_err());
        assert!(Config::from_lookup(lookup(&[("STORE_BACKEND", "postgres")])).is_err());
    }
}
