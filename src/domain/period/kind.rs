//! PeriodKind enum naming the granularity of a period string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::PeriodError;

/// Granularity and anchoring scheme of a period string.
///
/// Serialized with the backend's period-type identifiers (`MONTH`, `QUARTER_NOV`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodKind {
    Day,
    Month,
    Quarter,
    #[serde(rename = "QUARTER_NOV")]
    QuarterNovember,
    SixMonth,
    Year,
    #[serde(rename = "FINANCIAL_NOV")]
    FinancialNovember,
    /// ISO-8601 week. Only recognised by a codec with weeks enabled.
    Week,
}

impl PeriodKind {
    /// Returns the seven kinds every codec understands, finest first.
    pub fn standard() -> &'static [PeriodKind] {
        &[
            PeriodKind::Day,
            PeriodKind::Month,
            PeriodKind::Quarter,
            PeriodKind::QuarterNovember,
            PeriodKind::SixMonth,
            PeriodKind::Year,
            PeriodKind::FinancialNovember,
        ]
    }

    /// Returns true for every kind except `Week`.
    pub fn is_standard(&self) -> bool {
        !matches!(self, PeriodKind::Week)
    }

    /// Returns the backend identifier of this kind.
    pub fn identifier(&self) -> &'static str {
        match self {
            PeriodKind::Day => "DAY",
            PeriodKind::Month => "MONTH",
            PeriodKind::Quarter => "QUARTER",
            PeriodKind::QuarterNovember => "QUARTER_NOV",
            PeriodKind::SixMonth => "SIX_MONTH",
            PeriodKind::Year => "YEAR",
            PeriodKind::FinancialNovember => "FINANCIAL_NOV",
            PeriodKind::Week => "WEEK",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PeriodKind::Day => "Day",
            PeriodKind::Month => "Month",
            PeriodKind::Quarter => "Quarter",
            PeriodKind::QuarterNovember => "Quarter (November)",
            PeriodKind::SixMonth => "Six months",
            PeriodKind::Year => "Year",
            PeriodKind::FinancialNovember => "Financial year (November)",
            PeriodKind::Week => "Week",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

impl FromStr for PeriodKind {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PeriodKind::standard()
            .iter()
            .chain(std::iter::once(&PeriodKind::Week))
            .find(|kind| kind.identifier() == s)
            .copied()
            .ok_or_else(|| PeriodError::UnknownPeriodType(s.to_string()))
    }
}
