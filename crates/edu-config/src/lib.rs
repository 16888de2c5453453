//! # edu-config
//!
//! Layered configuration loading for EduBot using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`EDUBOT_*` prefix, `__` as separator)
//! 2. Project-level `.edubot/config.toml`
//! 3. User-level `~/.config/edubot/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `EDUBOT_API__BASE_URL` -> `api.base_url`,
//! `EDUBOT_FALLBACK__ALLOW_DEMO_FALLBACK` -> `fallback.allow_demo_fallback`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use edu_config::EduConfig;
//!
//! let config = EduConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod fallback;
mod session;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use fallback::FallbackConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix of every environment variable the config reads.
pub const ENV_PREFIX: &str = "EDUBOT_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EduConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl EduConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::file_figment().merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Defaults plus the TOML layers, without environment variables.
    fn file_figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".edubot/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("edubot").join("config.toml"))
    }
}
