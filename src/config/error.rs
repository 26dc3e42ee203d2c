//! Configuration error types

use thiserror::Error;

use crate::domain::period::PeriodKind;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing initialisation failed: {0}")]
    TracingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} cannot be used as the default grouping (it has no month range)")]
    UnsupportedDefaultGrouping(PeriodKind),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
