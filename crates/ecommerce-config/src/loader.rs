//! Configuration loader backed by the process environment.

use crate::{AppConfig, ServiceDefaults};
use config::{Config, ConfigError, Environment, Map};
use ecommerce_core::{telemetry::LogFormat, EcommerceError};
use serde::Deserialize;
use tracing::debug;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Raw environment variables understood by the services.
///
/// Keys are the lower-cased variable names. Anything absent or empty falls
/// back to the service defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EnvSettings {
    host: Option<String>,
    port: Option<u16>,
    service_name: Option<String>,
    environment: Option<String>,
    postgres_host: Option<String>,
    postgres_port: Option<u16>,
    postgres_user: Option<String>,
    postgres_password: Option<String>,
    postgres_db: Option<String>,
    postgres_max_connections: Option<u32>,
    redis_addr: Option<String>,
    redis_enabled: Option<bool>,
    log_level: Option<String>,
    log_format: Option<String>,
}

/// Loads [`AppConfig`] for one service.
///
/// Sources, lowest precedence first:
/// 1. the service's [`ServiceDefaults`]
/// 2. a `.env` file in the working directory, if present
/// 3. process environment variables (`PORT`, `SERVICE_NAME`, `POSTGRES_*`,
///    `REDIS_ADDR`, `REDIS_ENABLED`, `LOG_LEVEL`, `LOG_FORMAT`,
///    `ENVIRONMENT`, `HOST`)
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    defaults: ServiceDefaults,
    source: Option<Map<String, String>>,
}

impl ConfigLoader {
    /// Creates a loader reading the process environment.
    #[must_use]
    pub const fn new(defaults: ServiceDefaults) -> Self {
        Self {
            defaults,
            source: None,
        }
    }

    /// Reads variables from the given map instead of the process
    /// environment. Keys use the environment variable spelling.
    #[must_use]
    pub fn with_source(mut self, vars: Map<String, String>) -> Self {
        self.source = Some(vars);
        self
    }

    /// Loads and validates the configuration.
    pub fn load(&self) -> Result<AppConfig, EcommerceError> {
        if self.source.is_none() {
            if let Err(e) = dotenvy::dotenv() {
                debug!("No .env file found or error loading it: {}", e);
            }
        }

        let settings: EnvSettings = Config::builder()
            .add_source(
                Environment::default()
                    .ignore_empty(true)
                    .source(self.source.clone()),
            )
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_ecommerce_error)?;

        let config = self.apply(settings)?;
        Self::validate_config(&config)?;

        debug!(
            service = %config.service.name,
            port = config.service.port,
            environment = %config.service.environment,
            database = %config.database.redacted_connection_string(),
            redis = %config.redis.addr,
            "Configuration loaded"
        );

        Ok(config)
    }

    fn apply(&self, env: EnvSettings) -> Result<AppConfig, EcommerceError> {
        let mut config = AppConfig::defaults_for(&self.defaults);

        if let Some(host) = env.host {
            config.service.host = host;
        }
        if let Some(port) = env.port {
            config.service.port = port;
        }
        if let Some(name) = env.service_name {
            config.service.name = name;
        }
        if let Some(environment) = env.environment {
            config.service.environment = environment;
        }

        if let Some(host) = env.postgres_host {
            config.database.host = host;
        }
        if let Some(port) = env.postgres_port {
            config.database.port = port;
        }
        if let Some(user) = env.postgres_user {
            config.database.user = user;
        }
        if let Some(password) = env.postgres_password {
            config.database.password = password;
        }
        if let Some(name) = env.postgres_db {
            config.database.name = name;
        }
        if let Some(max) = env.postgres_max_connections {
            config.database.max_connections = max;
        }

        if let Some(addr) = env.redis_addr {
            config.redis.addr = addr;
        }
        if let Some(enabled) = env.redis_enabled {
            config.redis.enabled = enabled;
        }

        if let Some(level) = env.log_level {
            config.observability.log_level = level.trim().to_lowercase();
        }
        if let Some(format) = env.log_format {
            config.observability.log_format = format
                .parse::<LogFormat>()
                .map_err(EcommerceError::Configuration)?;
        }

        Ok(config)
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> Result<(), EcommerceError> {
        if config.service.port == 0 {
            return Err(EcommerceError::Configuration("PORT must be non-zero".to_string()));
        }

        if config.service.name.trim().is_empty() {
            return Err(EcommerceError::Configuration("SERVICE_NAME is required".to_string()));
        }

        if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
            return Err(EcommerceError::Configuration(format!(
                "Unknown LOG_LEVEL '{}', expected one of {}",
                config.observability.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        if config.database.min_connections > config.database.max_connections {
            return Err(EcommerceError::Configuration(
                "POSTGRES_MAX_CONNECTIONS is below the minimum pool size".to_string(),
            ));
        }

        Ok(())
    }
}

fn config_error_to_ecommerce_error(err: ConfigError) -> EcommerceError {
    EcommerceError::Configuration(err.to_string())
}
