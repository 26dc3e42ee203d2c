//! Completeness Module - period-grouped submission counts.
//!
//! Takes the raw records of the completeness API, each tagged with a
//! fine-grained period, and folds them into coarse period groups with one
//! month bucket per form and covered month.
//!
//! # Components
//!
//! - `CompletenessRecord` - One API row: period, form and counts
//! - `CompletenessAggregator` - The grouping pass
//! - `PeriodGroup` / `FormGroup` / `MonthBucket` - Grouped output
//! - `CompletenessGrouped` - Event summarising a grouping

mod aggregator;
mod events;
mod record;

pub use aggregator::{CompletenessAggregator, FormGroup, MonthBucket, PeriodGroup};
pub use events::CompletenessGrouped;
pub use record::{CompletenessRecord, CompletenessResponse, Counts, Form, FormId};
