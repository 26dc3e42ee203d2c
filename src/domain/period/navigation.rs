//! Stepping between adjacent periods of the same kind.

use super::iso_week::iso_weeks_in_year;
use super::{Period, PeriodCodec, PeriodError, PeriodKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Period {
    /// The period one unit of this period's kind later.
    ///
    /// # Errors
    ///
    /// `UnsupportedPeriodFormat` for days, which need calendar arithmetic.
    pub fn next(&self) -> Result<Period, PeriodError> {
        self.step(Direction::Forward)
    }

    /// The period one unit of this period's kind earlier.
    ///
    /// # Errors
    ///
    /// `UnsupportedPeriodFormat` for days, which need calendar arithmetic.
    pub fn previous(&self) -> Result<Period, PeriodError> {
        self.step(Direction::Backward)
    }

    /// The `count` periods following this one, soonest first.
    pub fn next_periods(&self, count: usize) -> Result<Vec<String>, PeriodError> {
        let mut periods = Vec::with_capacity(count);
        let mut current = self.clone();
        for _ in 0..count {
            current = current.next()?;
            periods.push(current.canonical().to_string());
        }
        Ok(periods)
    }

    /// The `count` periods preceding this one, oldest first.
    pub fn previous_periods(&self, count: usize) -> Result<Vec<String>, PeriodError> {
        let mut periods = Vec::with_capacity(count);
        let mut current = self.clone();
        for _ in 0..count {
            current = current.previous()?;
            periods.push(current.canonical().to_string());
        }
        periods.reverse();
        Ok(periods)
    }

    /// Every period of `start`'s kind from `start` through `end`, inclusive.
    ///
    /// Empty when `end` is before `start`.
    ///
    /// # Errors
    ///
    /// `KindMismatch` when the kinds differ; `UnsupportedPeriodFormat` for a
    /// multi-day range, since days cannot be stepped.
    pub fn range(start: &Period, end: &Period) -> Result<Vec<Period>, PeriodError> {
        if start.kind() != end.kind() {
            return Err(PeriodError::KindMismatch {
                expected: start.kind(),
                actual: end.kind(),
            });
        }

        let mut periods = Vec::new();
        if end.is_before(start) {
            return Ok(periods);
        }

        let mut current = start.clone();
        while current.is_before(end) {
            let next = current.next()?;
            periods.push(current);
            current = next;
        }
        periods.push(current);
        Ok(periods)
    }

    fn step(&self, direction: Direction) -> Result<Period, PeriodError> {
        let year = self.year();
        let period = match self.kind() {
            PeriodKind::Day => {
                return Err(PeriodError::UnsupportedPeriodFormat(
                    self.canonical().to_string(),
                ))
            }
            PeriodKind::Month => {
                let (year, month) = roll(year, self.month(), 12, direction);
                format!("{:04}{:02}", year, month)
            }
            PeriodKind::Quarter => {
                let (year, quarter) = roll(year, self.quarter(), 4, direction);
                format!("{:04}Q{}", year, quarter)
            }
            PeriodKind::QuarterNovember => {
                let (year, quarter) = roll(year, self.quarter(), 4, direction);
                format!("{:04}NovQ{}", year, quarter)
            }
            PeriodKind::SixMonth => {
                let (year, semester) = roll(year, self.semester(), 2, direction);
                format!("{:04}S{}", year, semester)
            }
            PeriodKind::Year => format!("{:04}", shift_year(year, direction)),
            PeriodKind::FinancialNovember => format!("{:04}Nov", shift_year(year, direction)),
            PeriodKind::Week => {
                let week = self.week_number()?;
                let (year, week) = match direction {
                    Direction::Forward if week >= iso_weeks_in_year(year) => (year + 1, 1),
                    Direction::Forward => (year, week + 1),
                    Direction::Backward if week <= 1 => (year - 1, iso_weeks_in_year(year - 1)),
                    Direction::Backward => (year, week - 1),
                };
                format!("{:04}W{:02}", year, week)
            }
        };
        PeriodCodec::with_weeks().parse(&period)
    }
}

/// Moves a 1-based index within a year of `units` slots, rolling the year over.
fn roll(year: i32, index: u32, units: u32, direction: Direction) -> (i32, u32) {
    match direction {
        Direction::Forward if index >= units => (year + 1, 1),
        Direction::Forward => (year, index + 1),
        Direction::Backward if index <= 1 => (year - 1, units),
        Direction::Backward => (year, index - 1),
    }
}

fn shift_year(year: i32, direction: Direction) -> i32 {
    match direction {
        Direction::Forward => year + 1,
        Direction::Backward => year - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Period {
        PeriodCodec::with_weeks().parse(s).unwrap()
    }

    fn next(s: &str) -> String {
        p(s).next().unwrap().canonical().to_string()
    }

    fn previous(s: &str) -> String {
        p(s).previous().unwrap().canonical().to_string()
    }

    #[test]
    fn month_rolls_over_december() {
        assert_eq!(next("202011"), "202012");
        assert_eq!(next("202012"), "202101");
        assert_eq!(previous("202101"), "202012");
    }

    #[test]
    fn quarter_rolls_over_q4() {
        assert_eq!(next("2020Q4"), "2021Q1");
        assert_eq!(previous("2021Q1"), "2020Q4");
        assert_eq!(next("2020Q2"), "2020Q3");
    }

    #[test]
    fn november_quarter_keeps_its_form() {
        assert_eq!(next("2020NovQ4"), "2021NovQ1");
        assert_eq!(previous("2020NovQ1"), "2019NovQ4");
        assert_eq!(next("2020NovQ2"), "2020NovQ3");
    }

    #[test]
    fn six_month_rolls_over_s2() {
        assert_eq!(next("2020S2"), "2021S1");
        assert_eq!(previous("2020S1"), "2019S2");
    }

    #[test]
    fn year_kinds_keep_suffix() {
        assert_eq!(next("2020"), "2021");
        assert_eq!(previous("2020"), "2019");
        assert_eq!(next("2020Nov"), "2021Nov");
        assert_eq!(previous("2020Nov"), "2019Nov");
    }

    #[test]
    fn week_rolls_over_iso_year() {
        assert_eq!(next("2020W52"), "2020W53");
        assert_eq!(next("2020W53"), "2021W01");
        assert_eq!(next("2021W52"), "2022W01");
        assert_eq!(previous("2021W01"), "2020W53");
        assert_eq!(previous("2020W10"), "2020W09");
    }

    #[test]
    fn week_without_number_is_rejected() {
        let broken = Period::from_parts(PeriodKind::Week, 2020, 1, 1, 1, 30, None, "2020W05");
        assert_eq!(
            broken.next(),
            Err(PeriodError::InvalidPeriodFormat("2020W05".to_string()))
        );
        assert!(broken.previous().is_err());
    }

    #[test]
    fn day_cannot_be_stepped() {
        assert_eq!(
            p("20200115").next(),
            Err(PeriodError::UnsupportedPeriodFormat("20200115".to_string()))
        );
        assert!(p("20200115").previous().is_err());
    }

    #[test]
    fn next_periods_are_ascending() {
        assert_eq!(p("2020").next_periods(2).unwrap(), vec!["2021", "2022"]);
        assert_eq!(
            p("2020Q3").next_periods(3).unwrap(),
            vec!["2020Q4", "2021Q1", "2021Q2"]
        );
    }

    #[test]
    fn previous_periods_are_ascending() {
        assert_eq!(
            p("202002").previous_periods(3).unwrap(),
            vec!["201911", "201912", "202001"]
        );
    }

    #[test]
    fn zero_periods_is_empty() {
        assert!(p("202002").next_periods(0).unwrap().is_empty());
        assert!(p("20200201").previous_periods(0).unwrap().is_empty());
    }

    #[test]
    fn range_is_inclusive() {
        let periods = Period::range(&p("2020Q3"), &p("2021Q2")).unwrap();
        let names: Vec<&str> = periods.iter().map(|p| p.canonical()).collect();
        assert_eq!(names, vec!["2020Q3", "2020Q4", "2021Q1", "2021Q2"]);
    }

    #[test]
    fn range_of_single_period() {
        let periods = Period::range(&p("20200101"), &p("20200101")).unwrap();
        assert_eq!(periods, vec![p("20200101")]);
    }

    #[test]
    fn reversed_range_is_empty() {
        assert!(Period::range(&p("202005"), &p("202001")).unwrap().is_empty());
    }

    #[test]
    fn range_rejects_mixed_kinds() {
        assert_eq!(
            Period::range(&p("202001"), &p("2020Q1")),
            Err(PeriodError::KindMismatch {
                expected: PeriodKind::Month,
                actual: PeriodKind::Quarter,
            })
        );
    }
}
