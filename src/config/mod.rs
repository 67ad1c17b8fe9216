//! Configuration loading and management
//!
//! Configuration comes from an optional YAML file (path in `BIZTIME_CONFIG`)
//! with environment variables layered on top:
//!
//! | Variable          | Field                 |
//! |-------------------|-----------------------|
//! | `BIZTIME_ENV`     | `environment`         |
//! | `BIZTIME_STORAGE` | `storage`             |
//! | `BIZTIME_HOST`    | `server.host`         |
//! | `PORT`            | `server.port`         |
//! | `DATABASE_URL`    | `database.url`        |

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Which database a process talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
}

impl std::str::FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            other => Err(anyhow!("Unknown environment '{}'", other)),
        }
    }
}

/// Storage backend serving the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageBackend {
    #[default]
    InMemory,
    Postgres,
}

impl std::str::FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "in-memory" | "memory" => Ok(StorageBackend::InMemory),
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            other => Err(anyhow!("Unknown storage backend '{}'", other)),
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// `host:port` as accepted by `TcpListener::bind`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// PostgreSQL connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Server URL. A URL that already names a database is used as is.
    pub url: String,

    /// Database used in development
    pub name: String,

    /// Database used when `environment` is `test`
    pub test_name: String,

    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost:5432".to_string(),
            name: "biztime".to_string(),
            test_name: "biztime_test".to_string(),
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    /// The database name for an environment
    pub fn database_name(&self, environment: Environment) -> &str {
        match environment {
            Environment::Development => &self.name,
            Environment::Test => &self.test_name,
        }
    }

    /// Full connection URL for a database on the configured server
    ///
    /// `database` is inserted only when `url` has no path of its own; any
    /// query string is kept after it.
    pub fn connection_url(&self, database: &str) -> String {
        let (base, query) = match self.url.find('?') {
            Some(idx) => self.url.split_at(idx),
            None => (self.url.as_str(), ""),
        };
        let authority = base.split_once("://").map_or(base, |(_, rest)| rest);

        match authority.split_once('/') {
            Some((_, path)) if !path.trim_matches('/').is_empty() => self.url.clone(),
            _ => format!("{}/{}{}", base.trim_end_matches('/'), database, query),
        }
    }
}

/// Complete configuration for the BizTime service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BizTimeConfig {
    pub environment: Environment,
    pub storage: StorageBackend,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl BizTimeConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path, e))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from `BIZTIME_CONFIG` (if set) and apply environment overrides
    pub fn load() -> Result<Self> {
        let config = match std::env::var("BIZTIME_CONFIG") {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(env) = lookup("BIZTIME_ENV") {
            self.environment = env.parse()?;
        }
        if let Some(storage) = lookup("BIZTIME_STORAGE") {
            self.storage = storage.parse()?;
        }
        if let Some(host) = lookup("BIZTIME_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| anyhow!("Invalid PORT '{}': {}", port, e))?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        Ok(self)
    }

    /// The database this process should use
    pub fn database_name(&self) -> &str {
        self.database.database_name(self.environment)
    }
}
