//! Application configuration loaded from environment variables.
//!
//! Every variable has a default. A missing variable falls back to its default
//! with a warning; a present but malformed one is an error.
//!
//! | Variable | Default |
//! |---|---|
//! | `SERVER_HOST` | `0.0.0.0` |
//! | `SERVER_PORT` | `8080` |
//! | `STORAGE_MODE` | `postgres` (or `memory`) |
//! | `DB_HOST` | `localhost` |
//! | `DB_PORT` | `5432` |
//! | `DB_USER` | `postgres` |
//! | `DB_PASSWORD` | `postgres` |
//! | `DB_NAME` | `tasks` |
//! | `DB_POOL_MAX_SIZE` | `100` |
//! | `AUTH_USERNAME` | `admin` |
//! | `AUTH_PASSWORD` | `admin` |

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("invalid value '{value}' for {key}: {message}")]
    InvalidValue {
        /// Name of the environment variable.
        key: String,
        /// Raw value found in the environment.
        value: String,
        /// Parser message.
        message: String,
    },

    /// `STORAGE_MODE` names an unsupported backend.
    #[error("unknown storage mode '{0}', expected 'postgres' or 'memory'")]
    UnknownStorageMode(String),
}

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// Diesel-backed `PostgreSQL` store.
    Postgres,
    /// Process-local in-memory store.
    Memory,
}

impl FromStr for StorageMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(Self::Postgres),
            "memory" | "in_memory" => Ok(Self::Memory),
            _ => Err(ConfigError::UnknownStorageMode(value.to_owned())),
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl ServerConfig {
    /// Returns the `host:port` pair to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// Database role.
    pub user: String,
    /// Database password.
    pub password: String,
    /// Database name.
    pub name: String,
    /// Upper bound on pooled connections.
    pub pool_max_size: NonZeroU32,
}

impl DatabaseConfig {
    /// Returns a libpq keyword/value connection string.
    ///
    /// Text values are single-quoted, with backslashes and quotes escaped.
    #[must_use]
    pub fn connection_string(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={} sslmode=disable",
            quote_value(&self.host),
            self.port,
            quote_value(&self.user),
            quote_value(&self.password),
            quote_value(&self.name),
        )
    }
}

fn quote_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        if matches!(ch, '\'' | '\\') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("pool_max_size", &self.pool_max_size)
            .finish()
    }
}

/// Shared basic-auth credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Expected username.
    pub username: String,
    /// Expected password.
    pub password: String,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

const DEFAULT_POOL_MAX_SIZE: NonZeroU32 = match NonZeroU32::new(100) {
    Some(size) => size,
    None => NonZeroU32::MIN,
};

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Selected storage backend.
    pub storage_mode: StorageMode,
    /// Database settings, used when `storage_mode` is `Postgres`.
    pub database: DatabaseConfig,
    /// Basic-auth credentials.
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = EnvReader { lookup };
        let storage_mode = env.string("STORAGE_MODE", "postgres").parse()?;

        Ok(Self {
            server: ServerConfig {
                host: env.string("SERVER_HOST", "0.0.0.0"),
                port: env.parsed("SERVER_PORT", 8080)?,
            },
            storage_mode,
            database: DatabaseConfig {
                host: env.string("DB_HOST", "localhost"),
                port: env.parsed("DB_PORT", 5432)?,
                user: env.string("DB_USER", "postgres"),
                password: env.secret("DB_PASSWORD", "postgres"),
                name: env.string("DB_NAME", "tasks"),
                pool_max_size: env.parsed("DB_POOL_MAX_SIZE", DEFAULT_POOL_MAX_SIZE)?,
            },
            auth: AuthConfig {
                username: env.string("AUTH_USERNAME", "admin"),
                password: env.secret("AUTH_PASSWORD", "admin"),
            },
        })
    }
}

struct EnvReader<F> {
    lookup: F,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn string(&self, key: &str, fallback: &str) -> String {
        (self.lookup)(key).unwrap_or_else(|| {
            warn!(key, fallback, "environment variable not set, using default");
            fallback.to_owned()
        })
    }

    fn secret(&self, key: &str, fallback: &str) -> String {
        (self.lookup)(key).unwrap_or_else(|| {
            warn!(key, "environment variable not set, using default");
            fallback.to_owned()
        })
    }

    fn parsed<T>(&self, key: &str, fallback: T) -> Result<T, ConfigError>
    where
        T: FromStr + fmt::Display,
        T::Err: fmt::Display,
    {
        let Some(raw) = (self.lookup)(key) else {
            warn!(key, %fallback, "environment variable not set, using default");
            return Ok(fallback);
        };
        raw.trim()
            .parse()
            .map_err(|err: T::Err| ConfigError::InvalidValue {
                key: key.to_owned(),
                value: raw.clone(),
                message: err.to_string(),
            })
    }
}
