//! Period value object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{PeriodCodec, PeriodError, PeriodKind};

/// Months covered by each November-anchored quarter, oldest first.
pub(crate) const NOVEMBER_QUARTERS: [[u32; 3]; 4] = [[11, 12, 1], [2, 3, 4], [5, 6, 7], [8, 9, 10]];

/// Months covered by a November financial year.
const FINANCIAL_NOVEMBER_MONTHS: [u32; 12] = [11, 12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// A parsed calendar period.
///
/// Built only through [`PeriodCodec::parse`] (or [`Period::parse`]), so every
/// value holds the canonical string it re-parses from. `month` is the last
/// calendar month the period spans; `quarter`, `semester` and `day` are derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    kind: PeriodKind,
    year: i32,
    month: u32,
    quarter: u32,
    semester: u32,
    day: u32,
    week: Option<u32>,
    canonical: String,
}

/// Inclusive calendar-day span of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        kind: PeriodKind,
        year: i32,
        month: u32,
        quarter: u32,
        semester: u32,
        day: u32,
        week: Option<u32>,
        canonical: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            year,
            month,
            quarter,
            semester,
            day,
            week,
            canonical: canonical.into(),
        }
    }

    /// Parses one of the seven standard period formats.
    pub fn parse(period: &str) -> Result<Self, PeriodError> {
        PeriodCodec::new().parse(period)
    }

    /// Detects the kind of a standard period string without failing.
    pub fn get_kind(period: &str) -> Option<PeriodKind> {
        PeriodCodec::new().get_kind(period)
    }

    pub fn kind(&self) -> PeriodKind {
        self.kind
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Last calendar month (1-12) covered by the period.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Quarter number; the November quarter for `QuarterNovember`.
    pub fn quarter(&self) -> u32 {
        self.quarter
    }

    pub fn semester(&self) -> u32 {
        self.semester
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// ISO week number, present only for `Week` periods.
    pub fn week(&self) -> Option<u32> {
        self.week
    }

    /// Week number of a `Week` period.
    pub(crate) fn week_number(&self) -> Result<u32, PeriodError> {
        self.week
            .ok_or_else(|| PeriodError::invalid_format(self.canonical.as_str()))
    }

    /// The exact period string this value round-trips through.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Re-buckets this period into `target`.
    ///
    /// The new string is built from the numeric fields only, so the conversion
    /// is lossy: a month snaps to its containing quarter, and converting back
    /// yields the quarter's last month. A month of November or December lands in
    /// the first November quarter of the following year; January to October
    /// land in the financial year that started the previous November.
    pub fn as_period_type(&self, target: PeriodKind) -> Result<Period, PeriodError> {
        let year = self.year;
        let month = self.month;
        let period = match target {
            PeriodKind::Day => format!("{:04}{:02}{:02}", year, month, self.day),
            PeriodKind::Month => format!("{:04}{:02}", year, month),
            PeriodKind::Quarter => format!("{:04}Q{}", year, standard_quarter(month)),
            PeriodKind::QuarterNovember => {
                let year = if month >= 11 { year + 1 } else { year };
                format!("{:04}NovQ{}", year, november_quarter(month))
            }
            PeriodKind::SixMonth => format!("{:04}S{}", year, self.semester),
            PeriodKind::Year => format!("{:04}", year),
            PeriodKind::FinancialNovember => {
                // `YYYYNov` runs November YYYY to October YYYY+1.
                let year = if self.kind == PeriodKind::FinancialNovember || month >= 11 {
                    year
                } else {
                    year - 1
                };
                format!("{:04}Nov", year)
            }
            PeriodKind::Week => return Err(PeriodError::InvalidPeriodType(target)),
        };
        PeriodCodec::new().parse(&period)
    }

    /// Calendar months covered by the period, in calendar order of the period.
    ///
    /// November-anchored kinds wrap around the year end, so their ranges are
    /// not ascending (`2020NovQ1` gives `[11, 12, 1]`).
    pub fn month_range(&self) -> Result<Vec<u32>, PeriodError> {
        let month = self.month;
        let months = match self.kind {
            PeriodKind::Day => return Err(PeriodError::NoMonthRange(self.canonical.clone())),
            PeriodKind::Month | PeriodKind::Week => vec![month],
            PeriodKind::Quarter => (month - 2..=month).collect(),
            PeriodKind::QuarterNovember => NOVEMBER_QUARTERS[self.quarter as usize - 1].to_vec(),
            PeriodKind::SixMonth => (month - 5..=month).collect(),
            PeriodKind::Year => (1..=12).collect(),
            PeriodKind::FinancialNovember => FINANCIAL_NOVEMBER_MONTHS.to_vec(),
        };
        Ok(months)
    }
}

/// Calendar quarter (1-4) containing `month`.
pub(crate) fn standard_quarter(month: u32) -> u32 {
    (month + 2) / 3
}

/// Half year (1-2) containing `month`.
pub(crate) fn standard_semester(month: u32) -> u32 {
    (month + 5) / 6
}

/// November quarter (1-4) containing `month`.
pub(crate) fn november_quarter(month: u32) -> u32 {
    match month {
        11 | 12 | 1 => 1,
        2..=4 => 2,
        5..=7 => 3,
        _ => 4,
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::parse(s)
    }
}

// Deserialization accepts weeks so serialized week periods round-trip
// regardless of whether user-facing parsing has weeks enabled.
impl TryFrom<String> for Period {
    type Error = PeriodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PeriodCodec::with_weeks().parse(&value)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.canonical
    }
}
