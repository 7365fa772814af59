//! Application configuration structures.

use ecommerce_core::telemetry::{LogFormat, TelemetryConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Service identity and listener.
    pub service: ServiceConfig,

    /// PostgreSQL configuration.
    pub database: DatabaseConfig,

    /// Redis configuration.
    pub redis: RedisConfig,

    /// Logging configuration.
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Builds the configuration a service gets with no environment overrides.
    #[must_use]
    pub fn defaults_for(defaults: &ServiceDefaults) -> Self {
        Self {
            service: ServiceConfig {
                name: defaults.service_name.to_string(),
                port: defaults.port,
                ..ServiceConfig::default()
            },
            database: DatabaseConfig {
                name: defaults.database_name.to_string(),
                ..DatabaseConfig::default()
            },
            redis: RedisConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    /// Returns the logging setup for this service.
    #[must_use]
    pub fn telemetry(&self) -> TelemetryConfig {
        TelemetryConfig {
            service_name: self.service.name.clone(),
            log_level: self.observability.log_level.clone(),
            log_format: self.observability.log_format,
        }
    }
}

/// Compile-time defaults that differ between the services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDefaults {
    /// Default `SERVICE_NAME`.
    pub service_name: &'static str,
    /// Default `PORT`.
    pub port: u16,
    /// Default `POSTGRES_DB`.
    pub database_name: &'static str,
}

impl ServiceDefaults {
    /// Defaults for the users service.
    #[must_use]
    pub const fn users() -> Self {
        Self {
            service_name: "users",
            port: 8001,
            database_name: "users",
        }
    }

    /// Defaults for the products service.
    #[must_use]
    pub const fn products() -> Self {
        Self {
            service_name: "products",
            port: 8002,
            database_name: "products",
        }
    }

    /// Defaults for the gateway.
    #[must_use]
    pub const fn gateway() -> Self {
        Self {
            service_name: "gateway",
            port: 8000,
            database_name: "gateway",
        }
    }
}

/// Service identity and HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name reported by `/health` and in logs.
    pub name: String,
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Deployment environment tag (development, staging, production).
    pub environment: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "users".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8001,
            environment: "development".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Returns the listener address.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// PostgreSQL configuration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Server host.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Login user.
    pub user: String,
    /// Login password.
    pub password: String,
    /// Database name.
    pub name: String,
    /// Minimum connection pool size.
    pub min_connections: u32,
    /// Maximum connection pool size.
    pub max_connections: u32,
    /// Connection acquire timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Idle timeout in seconds.
    pub idle_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "password".to_string(),
            name: "users".to_string(),
            min_connections: 1,
            max_connections: 10,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
        }
    }
}

impl DatabaseConfig {
    fn dsn(&self, password: &str) -> String {
        format!(
            "host={} port={} user={} password={} dbname={} sslmode=disable",
            self.host, self.port, self.user, password, self.name
        )
    }

    /// libpq-style connection string, used by tests to check what the
    /// loader resolved. The pool itself is built from the individual fields.
    #[cfg(test)]
    pub(crate) fn connection_string(&self) -> String {
        self.dsn(&self.password)
    }

    /// Returns the connection string with the password masked, for logs.
    #[must_use]
    pub fn redacted_connection_string(&self) -> String {
        self.dsn("***")
    }

    /// Returns the acquire timeout as a Duration.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Returns the idle timeout as a Duration.
    #[must_use]
    pub const fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .field("min_connections", &self.min_connections)
            .field("max_connections", &self.max_connections)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("idle_timeout_secs", &self.idle_timeout_secs)
            .finish()
    }
}

/// Redis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis address as `host:port`.
    pub addr: String,
    /// Enable Redis (can be disabled for local development).
    pub enabled: bool,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            addr: "localhost:6379".to_string(),
            enabled: true,
        }
    }
}

impl RedisConfig {
    /// Returns the connection URL for the configured address, database 0.
    #[must_use]
    pub fn url(&self) -> String {
        if self.addr.starts_with("redis://") || self.addr.starts_with("rediss://") {
            self.addr.clone()
        } else {
            format!("redis://{}/0", self.addr)
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log format (json, pretty).
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Json,
        }
    }
}
