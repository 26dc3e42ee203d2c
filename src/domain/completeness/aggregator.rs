//! Completeness Aggregator - folds fine-grained records into coarse period groups.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::domain::period::{Period, PeriodCodec, PeriodError, PeriodKind};

use super::{CompletenessRecord, Counts, Form, FormId};

/// Counts for one form in one calendar month of a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub ready: u64,
    pub error: u64,
    pub exported: u64,
    /// Fine-grained period of the last record added to this month; the coarse
    /// group period until a record lands here.
    pub period: Period,
    pub form: FormId,
}

impl MonthBucket {
    fn empty(period: Period, form: FormId) -> Self {
        Self {
            ready: 0,
            error: 0,
            exported: 0,
            period,
            form,
        }
    }

    pub fn counts(&self) -> Counts {
        Counts::new(self.ready, self.error, self.exported)
    }

    fn add(&mut self, counts: Counts, period: Period) {
        self.ready += counts.ready;
        self.error += counts.error;
        self.exported += counts.exported;
        self.period = period;
    }
}

/// One form's month buckets within a period group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormGroup {
    #[serde(flatten)]
    pub form: Form,
    /// Keyed by the months of the owning group's period.
    pub months: BTreeMap<u32, MonthBucket>,
}

impl FormGroup {
    pub fn totals(&self) -> Counts {
        let mut totals = Counts::default();
        for bucket in self.months.values() {
            totals += bucket.counts();
        }
        totals
    }
}

/// All forms reporting into one coarse period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodGroup {
    pub period: Period,
    pub forms: Vec<FormGroup>,
}

impl PeriodGroup {
    pub fn totals(&self) -> Counts {
        let mut totals = Counts::default();
        for form in &self.forms {
            totals += form.totals();
        }
        totals
    }

    pub fn form(&self, id: FormId) -> Option<&FormGroup> {
        self.forms.iter().find(|f| f.form.id == id)
    }
}

/// Groups completeness records by coarse period, form and month.
pub struct CompletenessAggregator;

impl CompletenessAggregator {
    /// Groups `records` into `target` periods using the default codec.
    ///
    /// Groups come back sorted descending by canonical string (a plain string
    /// sort) and forms within a group sorted by name. The first record whose
    /// period fails to parse or convert aborts the whole call.
    pub fn group(
        records: &[CompletenessRecord],
        target: PeriodKind,
    ) -> Result<Vec<PeriodGroup>, PeriodError> {
        Self::group_with(&PeriodCodec::new(), records, target)
    }

    /// Same as [`group`](Self::group), parsing record periods with `codec`.
    pub fn group_with(
        codec: &PeriodCodec,
        records: &[CompletenessRecord],
        target: PeriodKind,
    ) -> Result<Vec<PeriodGroup>, PeriodError> {
        let mut groups: Vec<PeriodGroup> = Vec::new();
        let mut group_index: HashMap<String, usize> = HashMap::new();
        let mut form_index: HashMap<(usize, FormId), usize> = HashMap::new();

        for record in records {
            let fine = codec.parse(&record.period)?;
            let coarse = fine.as_period_type(target)?;

            let g = match group_index.get(coarse.canonical()).copied() {
                Some(g) => g,
                None => {
                    groups.push(PeriodGroup {
                        period: coarse.clone(),
                        forms: Vec::new(),
                    });
                    group_index.insert(coarse.canonical().to_string(), groups.len() - 1);
                    groups.len() - 1
                }
            };
            let group = &mut groups[g];

            let f = match form_index.get(&(g, record.form.id)).copied() {
                Some(f) => f,
                None => {
                    let months = coarse
                        .month_range()?
                        .into_iter()
                        .map(|m| (m, MonthBucket::empty(coarse.clone(), record.form.id)))
                        .collect();
                    group.forms.push(FormGroup {
                        form: record.form.clone(),
                        months,
                    });
                    form_index.insert((g, record.form.id), group.forms.len() - 1);
                    group.forms.len() - 1
                }
            };

            let month = fine.month();
            group.forms[f]
                .months
                .entry(month)
                .or_insert_with(|| MonthBucket::empty(coarse.clone(), record.form.id))
                .add(record.counts, fine);
        }

        for group in &mut groups {
            group.forms.sort_by(|a, b| a.form.name.cmp(&b.form.name));
        }
        groups.sort_by(|a, b| b.period.canonical().cmp(a.period.canonical()));

        Ok(groups)
    }
}
