//! Period handling configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::period::{PeriodCodec, PeriodKind};

/// Period parsing and grouping settings
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodSettings {
    /// Grouping used when a request does not name one
    #[serde(default = "default_grouping")]
    pub default_grouping: PeriodKind,

    /// Accept `YYYYWnn` ISO week strings when parsing
    #[serde(default)]
    pub enable_week_periods: bool,
}

fn default_grouping() -> PeriodKind {
    PeriodKind::Quarter
}

impl PeriodSettings {
    /// Codec matching these settings.
    pub fn codec(&self) -> PeriodCodec {
        if self.enable_week_periods {
            PeriodCodec::with_weeks()
        } else {
            PeriodCodec::new()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.default_grouping {
            PeriodKind::Day | PeriodKind::Week => Err(
                ValidationError::UnsupportedDefaultGrouping(self.default_grouping),
            ),
            _ => Ok(()),
        }
    }
}

impl Default for PeriodSettings {
    fn default() -> Self {
        Self {
            default_grouping: default_grouping(),
            enable_week_periods: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_group_by_quarter_without_weeks() {
        let settings = PeriodSettings::default();
        assert_eq!(settings.default_grouping, PeriodKind::Quarter);
        assert!(!settings.codec().weeks_enabled());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn week_flag_enables_week_codec() {
        let settings = PeriodSettings {
            enable_week_periods: true,
            ..Default::default()
        };
        assert!(settings.codec().parse("2020W10").is_ok());
    }

    #[test]
    fn day_and_week_groupings_are_rejected() {
        for kind in [PeriodKind::Day, PeriodKind::Week] {
            let settings = PeriodSettings {
                default_grouping: kind,
                ..Default::default()
            };
            assert_eq!(
                settings.validate(),
                Err(ValidationError::UnsupportedDefaultGrouping(kind))
            );
        }
    }

    #[test]
    fn deserializes_kind_identifiers() {
        let json = r#"{"default_grouping": "QUARTER_NOV", "enable_week_periods": true}"#;
        let settings: PeriodSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.default_grouping, PeriodKind::QuarterNovember);
        assert!(settings.enable_week_periods);
    }
}
