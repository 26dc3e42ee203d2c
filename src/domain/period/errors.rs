//! Errors raised by the period codec.

use thiserror::Error;

use super::PeriodKind;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Failures of period parsing, conversion and navigation.
///
/// All of these are data errors: the codec never recovers from them locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error("Invalid period format: {0}")]
    InvalidPeriodFormat(String),

    #[error("Invalid period type: {0}")]
    InvalidPeriodType(PeriodKind),

    #[error("Unsupported period format: {0}")]
    UnsupportedPeriodFormat(String),

    #[error("Period {0} has no month range")]
    NoMonthRange(String),

    #[error("Expected a {expected} period, got {actual}")]
    KindMismatch {
        expected: PeriodKind,
        actual: PeriodKind,
    },

    #[error("Unknown period type: {0}")]
    UnknownPeriodType(String),
}

impl PeriodError {
    pub(crate) fn invalid_format(input: impl Into<String>) -> Self {
        PeriodError::InvalidPeriodFormat(input.into())
    }
}

impl From<PeriodError> for DomainError {
    fn from(err: PeriodError) -> Self {
        let code = match err {
            PeriodError::InvalidPeriodType(_)
            | PeriodError::KindMismatch { .. }
            | PeriodError::UnknownPeriodType(_) => ErrorCode::InvalidPeriodType,
            _ => ErrorCode::InvalidPeriod,
        };
        DomainError::new(code, err.to_string())
    }
}
