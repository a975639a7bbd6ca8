//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `RENTSENSE`
//! prefix and `__` (double underscore) separating nested keys, e.g.
//! `RENTSENSE__SERVER__PORT=8080` sets `server.port`.
//!
//! Every section has defaults, so the server starts with no environment at
//! all: in-memory storage, port 8080, dev CORS origin.

mod error;
mod server;
mod static_files;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use static_files::StaticFilesConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Static frontend assets
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file first if present (development convenience), then
    /// reads `RENTSENSE`-prefixed variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its typed
    /// field.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RENTSENSE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        Ok(())
    }

    /// Check if running in production environment.
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("RENTSENSE__SERVER__PORT");
        env::remove_var("RENTSENSE__SERVER__ENVIRONMENT");
        env::remove_var("RENTSENSE__STATIC_FILES__DIR");
    }

    #[test]
    fn loads_with_no_environment_at_all() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_nested_values_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RENTSENSE__SERVER__PORT", "3001");
        env::set_var("RENTSENSE__STATIC_FILES__DIR", "dist");
        let config = AppConfig::load().unwrap();
        clear_env();

        assert_eq!(config.server.port, 3001);
        assert_eq!(config.static_files.dir.to_str(), Some("dist"));
    }

    #[test]
    fn production_environment_is_detected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RENTSENSE__SERVER__ENVIRONMENT", "production");
        let config = AppConfig::load().unwrap();
        clear_env();

        assert!(config.is_production());
    }
}
