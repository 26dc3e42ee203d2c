//! Application configuration module
//!
//! Configuration is loaded from environment variables with the `config` and
//! `dotenvy` crates. Variables use the `PERIOD_COMPLETENESS` prefix and `__`
//! between nested keys. Every section has defaults, so an empty environment
//! yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use period_completeness::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging).expect("Failed to install subscriber");
//! ```

mod error;
mod features;
mod logging;
mod periods;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use logging::{init_tracing, LoggingConfig};
pub use periods::PeriodSettings;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Period parsing and default grouping
    #[serde(default)]
    pub periods: PeriodSettings,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `PERIOD_COMPLETENESS__*` variables.
    ///
    /// # Environment Variable Format
    ///
    /// - `PERIOD_COMPLETENESS__PERIODS__DEFAULT_GROUPING=MONTH` -> `periods.default_grouping`
    /// - `PERIOD_COMPLETENESS__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PERIOD_COMPLETENESS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.periods.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::period::PeriodKind;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "PERIOD_COMPLETENESS__PERIODS__DEFAULT_GROUPING",
        "PERIOD_COMPLETENESS__PERIODS__ENABLE_WEEK_PERIODS",
        "PERIOD_COMPLETENESS__LOGGING__LEVEL",
        "PERIOD_COMPLETENESS__LOGGING__JSON",
        "PERIOD_COMPLETENESS__FEATURES__PUBLISH_GROUPING_EVENTS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.periods.default_grouping, PeriodKind::Quarter);
        assert!(!config.periods.enable_week_periods);
        assert_eq!(config.logging.level, "info");
        assert!(config.features.publish_grouping_events);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PERIOD_COMPLETENESS__PERIODS__DEFAULT_GROUPING", "SIX_MONTH");
        env::set_var("PERIOD_COMPLETENESS__PERIODS__ENABLE_WEEK_PERIODS", "true");
        env::set_var("PERIOD_COMPLETENESS__LOGGING__JSON", "true");
        env::set_var("PERIOD_COMPLETENESS__FEATURES__PUBLISH_GROUPING_EVENTS", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.periods.default_grouping, PeriodKind::SixMonth);
        assert!(config.periods.enable_week_periods);
        assert!(config.logging.json);
        assert!(!config.features.publish_grouping_events);
    }

    #[test]
    fn test_validate_rejects_day_grouping() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PERIOD_COMPLETENESS__PERIODS__DEFAULT_GROUPING", "DAY");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::UnsupportedDefaultGrouping(PeriodKind::Day))
        );
    }

    #[test]
    fn test_unknown_grouping_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PERIOD_COMPLETENESS__PERIODS__DEFAULT_GROUPING", "FORTNIGHT");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
