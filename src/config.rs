use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::CatalogResult;

/// Runtime configuration, read from an optional TOML file.
///
/// ```toml
/// log_level = "debug"
///
/// [server]
/// port = 8080
/// cors_origin = "http://localhost:5173"
///
/// [database]
/// path = "catalog.db"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub log_level: Option<String>,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub cors_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            cors_origin: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "cinegraph.db".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Load from `path`, or fall back to defaults when no file is given.
    pub fn load(path: Option<&Path>) -> CatalogResult<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Self::from_toml(&content)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> CatalogResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}
