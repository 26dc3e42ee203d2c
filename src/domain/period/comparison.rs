//! Chronological comparison of periods.
//!
//! Years are compared first. On a tie, the field compared is chosen by the
//! kind of the *left* operand only: comparing a quarter with a six-month
//! period compares their quarter numbers. Callers comparing mixed kinds get
//! results in the left operand's terms.

use std::cmp::Ordering;

use super::{Period, PeriodError, PeriodKind};

impl Period {
    fn chronological_cmp(&self, other: &Period) -> Ordering {
        self.year()
            .cmp(&other.year())
            .then_with(|| match self.kind() {
                PeriodKind::Day => (self.month(), self.day()).cmp(&(other.month(), other.day())),
                PeriodKind::Month => self.month().cmp(&other.month()),
                PeriodKind::Quarter | PeriodKind::QuarterNovember => {
                    self.quarter().cmp(&other.quarter())
                }
                PeriodKind::SixMonth => self.semester().cmp(&other.semester()),
                PeriodKind::Week => self.week().cmp(&other.week()),
                PeriodKind::Year | PeriodKind::FinancialNovember => Ordering::Equal,
            })
    }

    pub fn is_before(&self, other: &Period) -> bool {
        self.chronological_cmp(other) == Ordering::Less
    }

    pub fn is_before_or_equal(&self, other: &Period) -> bool {
        self.chronological_cmp(other) != Ordering::Greater
    }

    pub fn is_after(&self, other: &Period) -> bool {
        self.chronological_cmp(other) == Ordering::Greater
    }

    pub fn is_after_or_equal(&self, other: &Period) -> bool {
        self.chronological_cmp(other) != Ordering::Less
    }
}

/// Parses both strings and checks `a` is strictly before `b`.
pub fn is_before(a: &str, b: &str) -> Result<bool, PeriodError> {
    Ok(Period::parse(a)?.is_before(&Period::parse(b)?))
}

pub fn is_before_or_equal(a: &str, b: &str) -> Result<bool, PeriodError> {
    Ok(Period::parse(a)?.is_before_or_equal(&Period::parse(b)?))
}

pub fn is_after(a: &str, b: &str) -> Result<bool, PeriodError> {
    Ok(Period::parse(a)?.is_after(&Period::parse(b)?))
}

pub fn is_after_or_equal(a: &str, b: &str) -> Result<bool, PeriodError> {
    Ok(Period::parse(a)?.is_after_or_equal(&Period::parse(b)?))
}
