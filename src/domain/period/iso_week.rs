//! ISO-8601 week helpers.

use chrono::{Datelike, Duration, NaiveDate};

use super::{DateRange, PeriodCodec, PeriodError, PeriodKind};

/// Number of ISO weeks (52 or 53) in `year`.
///
/// December 28th always falls in the last ISO week of its year.
pub fn iso_weeks_in_year(year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, 12, 28)
        .map(|date| date.iso_week().week())
        .unwrap_or(52)
}

/// Monday-to-Sunday span of a `YYYYWnn` week string.
pub fn iso_week_date_range(week: &str) -> Result<DateRange, PeriodError> {
    let period = PeriodCodec::with_weeks().parse(week)?;
    if period.kind() != PeriodKind::Week {
        return Err(PeriodError::invalid_format(week));
    }
    period.date_range()
}

/// Monday starting ISO week `week` of `year`.
///
/// Week 1 is the week holding January 4th.
pub(crate) fn iso_week_monday(year: i32, week: u32) -> Option<NaiveDate> {
    let jan4 = NaiveDate::from_ymd_opt(year, 1, 4)?;
    let first_monday = jan4 - Duration::days(i64::from(jan4.weekday().num_days_from_monday()));
    first_monday.checked_add_signed(Duration::weeks(i64::from(week) - 1))
}
