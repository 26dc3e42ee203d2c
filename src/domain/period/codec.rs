//! PeriodCodec - parsing of compact period strings.
//!
//! Formats overlap in their allowed characters, so detection runs in a fixed
//! priority order:
//!
//! | priority | marker        | kind               | length | example     |
//! |----------|---------------|--------------------|--------|-------------|
//! | 1        | `NovQ`        | QuarterNovember    | 9      | `2020NovQ1` |
//! | 2        | `Nov`         | FinancialNovember  | 7      | `2020Nov`   |
//! | 3        | `Q`           | Quarter            | 6      | `2020Q1`    |
//! | 4        | `S`           | SixMonth           | 6      | `2020S1`    |
//! | 5        | `W` (opt-in)  | Week               | 7      | `2020W05`   |
//! | 6        | -             | Month              | 6      | `202001`    |
//! | 7        | -             | Day                | 8      | `20200115`  |
//! | 8        | -             | Year               | 4      | `2020`      |

use chrono::{Datelike, Duration, NaiveDate};

use super::iso_week::{iso_week_monday, iso_weeks_in_year};
use super::value::{standard_quarter, standard_semester, NOVEMBER_QUARTERS};
use super::{Period, PeriodError, PeriodKind};

/// Parser for period strings.
///
/// The default codec understands the seven standard kinds. ISO weeks are only
/// partially supported across the model and must be switched on explicitly
/// with [`PeriodCodec::with_weeks`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodCodec {
    weeks_enabled: bool,
}

impl PeriodCodec {
    /// Creates a codec for the seven standard kinds.
    pub const fn new() -> Self {
        Self {
            weeks_enabled: false,
        }
    }

    /// Creates a codec that also recognises `YYYYWnn` week strings.
    pub const fn with_weeks() -> Self {
        Self {
            weeks_enabled: true,
        }
    }

    pub fn weeks_enabled(&self) -> bool {
        self.weeks_enabled
    }

    /// Detects the kind of `period` from its markers and length.
    ///
    /// Never fails: returns `None` when no rule matches or the length is wrong
    /// for the matched rule. Digits are not validated here.
    pub fn get_kind(&self, period: &str) -> Option<PeriodKind> {
        let (kind, expected_len) = if period.contains("NovQ") {
            (PeriodKind::QuarterNovember, 9)
        } else if period.contains("Nov") {
            (PeriodKind::FinancialNovember, 7)
        } else if period.contains('Q') {
            (PeriodKind::Quarter, 6)
        } else if period.contains('S') {
            (PeriodKind::SixMonth, 6)
        } else if self.weeks_enabled && period.contains('W') {
            (PeriodKind::Week, 7)
        } else {
            return match period.len() {
                6 => Some(PeriodKind::Month),
                8 => Some(PeriodKind::Day),
                4 => Some(PeriodKind::Year),
                _ => None,
            };
        };

        (period.len() == expected_len).then_some(kind)
    }

    /// Parses `period` into a [`Period`].
    ///
    /// # Errors
    ///
    /// `InvalidPeriodFormat` when no format matches, the length is wrong, a
    /// numeric field holds non-digits, or a field is out of range (month 13,
    /// quarter 5, February 30th, week 54...).
    pub fn parse(&self, period: &str) -> Result<Period, PeriodError> {
        let kind = self
            .get_kind(period)
            .ok_or_else(|| PeriodError::invalid_format(period))?;
        if !period.is_ascii() {
            return Err(PeriodError::invalid_format(period));
        }

        let fields = Fields { input: period };
        let year = fields.year()?;

        match kind {
            PeriodKind::QuarterNovember => {
                fields.expect_marker(4, "NovQ")?;
                let quarter = fields.number(8..9, 1, 4)?;
                let month = NOVEMBER_QUARTERS[quarter as usize - 1][2];
                Ok(Period::from_parts(
                    kind,
                    year,
                    month,
                    quarter,
                    (quarter + 1) / 2,
                    1,
                    None,
                    period,
                ))
            }
            PeriodKind::FinancialNovember => {
                fields.expect_marker(4, "Nov")?;
                Ok(Period::from_parts(kind, year, 10, 1, 2, 31, None, period))
            }
            PeriodKind::Quarter => {
                fields.expect_marker(4, "Q")?;
                let quarter = fields.number(5..6, 1, 4)?;
                Ok(Period::from_parts(
                    kind,
                    year,
                    quarter * 3,
                    quarter,
                    (quarter + 1) / 2,
                    1,
                    None,
                    period,
                ))
            }
            PeriodKind::SixMonth => {
                fields.expect_marker(4, "S")?;
                let semester = fields.number(5..6, 1, 2)?;
                Ok(Period::from_parts(
                    kind,
                    year,
                    semester * 6,
                    semester * 2,
                    semester,
                    1,
                    None,
                    period,
                ))
            }
            PeriodKind::Week => {
                fields.expect_marker(4, "W")?;
                let week = fields.number(5..7, 1, iso_weeks_in_year(year))?;
                // An ISO week belongs to the month holding its Thursday.
                let thursday = iso_week_monday(year, week)
                    .and_then(|monday| monday.checked_add_signed(Duration::days(3)))
                    .ok_or_else(|| PeriodError::invalid_format(period))?;
                let month = thursday.month();
                Ok(Period::from_parts(
                    kind,
                    year,
                    month,
                    standard_quarter(month),
                    standard_semester(month),
                    thursday.day(),
                    Some(week),
                    period,
                ))
            }
            PeriodKind::Month => {
                let month = fields.number(4..6, 1, 12)?;
                Ok(Period::from_parts(
                    kind,
                    year,
                    month,
                    standard_quarter(month),
                    standard_semester(month),
                    1,
                    None,
                    period,
                ))
            }
            PeriodKind::Day => {
                let month = fields.number(4..6, 1, 12)?;
                let day = fields.number(6..8, 1, 31)?;
                if NaiveDate::from_ymd_opt(year, month, day).is_none() {
                    return Err(PeriodError::invalid_format(period));
                }
                Ok(Period::from_parts(
                    kind,
                    year,
                    month,
                    standard_quarter(month),
                    standard_semester(month),
                    day,
                    None,
                    period,
                ))
            }
            PeriodKind::Year => Ok(Period::from_parts(kind, year, 12, 4, 2, 31, None, period)),
        }
    }
}

/// Positional field access over an ASCII period string.
struct Fields<'a> {
    input: &'a str,
}

impl Fields<'_> {
    fn invalid(&self) -> PeriodError {
        PeriodError::invalid_format(self.input)
    }

    fn digits(&self, range: std::ops::Range<usize>) -> Result<u32, PeriodError> {
        let slice = self.input.get(range).ok_or_else(|| self.invalid())?;
        if slice.is_empty() || !slice.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.invalid());
        }
        slice.parse().map_err(|_| self.invalid())
    }

    fn year(&self) -> Result<i32, PeriodError> {
        let year = self.digits(0..4)?;
        i32::try_from(year).map_err(|_| self.invalid())
    }

    fn number(
        &self,
        range: std::ops::Range<usize>,
        min: u32,
        max: u32,
    ) -> Result<u32, PeriodError> {
        let value = self.digits(range)?;
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(self.invalid())
        }
    }

    fn expect_marker(&self, start: usize, marker: &str) -> Result<(), PeriodError> {
        match self.input.get(start..start + marker.len()) {
            Some(found) if found == marker => Ok(()),
            _ => Err(self.invalid()),
        }
    }
}
