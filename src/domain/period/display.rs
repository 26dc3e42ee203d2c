//! Human-facing renderings of a period and its calendar span.

use chrono::NaiveDate;

use super::iso_week::iso_week_monday;
use super::value::NOVEMBER_QUARTERS;
use super::{DateRange, Period, PeriodError, PeriodKind};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn month_abbreviation(month: u32) -> &'static str {
    MONTH_ABBREVIATIONS
        .get(month as usize - 1)
        .copied()
        .unwrap_or("???")
}

impl Period {
    /// Short code shown in tables: `01/2020`, `Q1/2020`, `NovQ1/2020`, ...
    pub fn to_code(&self) -> String {
        let year = self.year();
        match self.kind() {
            PeriodKind::Day => format!("{:02}/{:02}/{:04}", self.day(), self.month(), year),
            PeriodKind::Month => format!("{:02}/{:04}", self.month(), year),
            PeriodKind::Quarter => format!("Q{}/{:04}", self.quarter(), year),
            PeriodKind::QuarterNovember => format!("NovQ{}/{:04}", self.quarter(), year),
            PeriodKind::SixMonth => format!("S{}/{:04}", self.semester(), year),
            PeriodKind::FinancialNovember => format!("{:04}Nov", year),
            PeriodKind::Year => format!("{:04}", year),
            PeriodKind::Week => match self.week() {
                Some(week) => format!("W{:02}/{:04}", week, year),
                None => self.canonical().to_string(),
            },
        }
    }

    /// Descriptive label with English month names, e.g. `Q1 2020 (Jan - Mar)`.
    pub fn pretty(&self) -> Result<String, PeriodError> {
        let year = self.year();
        let label = match self.kind() {
            PeriodKind::Day => format!(
                "{} {} {:04}",
                self.day(),
                month_abbreviation(self.month()),
                year
            ),
            PeriodKind::Month => format!("{} {:04}", month_abbreviation(self.month()), year),
            PeriodKind::Quarter | PeriodKind::QuarterNovember | PeriodKind::SixMonth => {
                let prefix = match self.kind() {
                    PeriodKind::Quarter => format!("Q{}", self.quarter()),
                    PeriodKind::QuarterNovember => format!("NovQ{}", self.quarter()),
                    _ => format!("S{}", self.semester()),
                };
                let months = self.month_range()?;
                let first = months.first().copied().unwrap_or(self.month());
                format!(
                    "{} {:04} ({} - {})",
                    prefix,
                    year,
                    month_abbreviation(first),
                    month_abbreviation(self.month())
                )
            }
            PeriodKind::Year => format!("{:04}", year),
            PeriodKind::FinancialNovember => format!("Nov {:04} - Oct {:04}", year, year + 1),
            PeriodKind::Week => {
                let range = self.date_range()?;
                format!(
                    "W{:02} {:04} ({} - {})",
                    self.week_number()?,
                    year,
                    range.start.format("%d/%m"),
                    range.end.format("%d/%m")
                )
            }
        };
        Ok(label)
    }

    /// First and last calendar day covered by the period.
    pub fn date_range(&self) -> Result<DateRange, PeriodError> {
        let year = self.year();
        let month = self.month();
        let (start, end) = match self.kind() {
            PeriodKind::Day => {
                let day = self.ymd(year, month, self.day())?;
                (day, day)
            }
            PeriodKind::Month => (self.ymd(year, month, 1)?, self.last_day(year, month)?),
            PeriodKind::Quarter => (self.ymd(year, month - 2, 1)?, self.last_day(year, month)?),
            PeriodKind::SixMonth => (self.ymd(year, month - 5, 1)?, self.last_day(year, month)?),
            PeriodKind::Year => (self.ymd(year, 1, 1)?, self.ymd(year, 12, 31)?),
            PeriodKind::QuarterNovember => {
                let first_month = NOVEMBER_QUARTERS[self.quarter() as usize - 1][0];
                let first_year = if first_month >= 11 { year - 1 } else { year };
                (
                    self.ymd(first_year, first_month, 1)?,
                    self.last_day(year, month)?,
                )
            }
            PeriodKind::FinancialNovember => {
                (self.ymd(year, 11, 1)?, self.ymd(year + 1, 10, 31)?)
            }
            PeriodKind::Week => {
                let week = self.week_number()?;
                let monday = iso_week_monday(year, week).ok_or_else(|| self.out_of_calendar())?;
                let sunday = monday
                    .checked_add_signed(chrono::Duration::days(6))
                    .ok_or_else(|| self.out_of_calendar())?;
                (monday, sunday)
            }
        };
        Ok(DateRange { start, end })
    }

    fn out_of_calendar(&self) -> PeriodError {
        PeriodError::invalid_format(self.canonical())
    }

    fn ymd(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate, PeriodError> {
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| self.out_of_calendar())
    }

    fn last_day(&self, year: i32, month: u32) -> Result<NaiveDate, PeriodError> {
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        self.ymd(next_year, next_month, 1)?
            .pred_opt()
            .ok_or_else(|| self.out_of_calendar())
    }
}
