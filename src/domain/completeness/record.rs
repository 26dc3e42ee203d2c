//! Raw completeness records as returned by the completeness API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::fmt;
use std::ops::AddAssign;

use crate::domain::period::{PeriodError, PeriodKind};

use super::{CompletenessAggregator, PeriodGroup};

/// Identifier of a data-entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(u64);

impl FormId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Form descriptor attached to a record.
///
/// Fields beyond `id` and `name` are kept as-is so they survive into the
/// grouped output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub id: FormId,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl Form {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: FormId::new(id),
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// Submission counts for one form in one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Counts {
    pub ready: u64,
    pub error: u64,
    pub exported: u64,
}

impl Counts {
    pub fn new(ready: u64, error: u64, exported: u64) -> Self {
        Self {
            ready,
            error,
            exported,
        }
    }

    pub fn total(&self) -> u64 {
        self.ready + self.error + self.exported
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, other: Self) {
        self.ready += other.ready;
        self.error += other.error;
        self.exported += other.exported;
    }
}

/// One row of the completeness API: counts for a form in a fine-grained period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessRecord {
    pub period: String,
    pub form: Form,
    pub counts: Counts,
}

impl CompletenessRecord {
    pub fn new(period: impl Into<String>, form: Form, counts: Counts) -> Self {
        Self {
            period: period.into(),
            form,
            counts,
        }
    }
}

/// Response body of the completeness endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletenessResponse {
    #[serde(default)]
    pub completeness: Vec<CompletenessRecord>,
}

impl CompletenessResponse {
    /// Groups every record of the response by `target` periods.
    pub fn group(&self, target: PeriodKind) -> Result<Vec<PeriodGroup>, PeriodError> {
        CompletenessAggregator::group(&self.completeness, target)
    }
}
