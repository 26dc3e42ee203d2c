//! Completeness domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, RequestId, Timestamp};
use crate::domain::period::PeriodKind;

use super::Counts;

/// Published after a completeness response has been grouped by period.
///
/// Carries a summary only; the grouped buckets stay with the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessGrouped {
    pub event_id: EventId,
    /// The grouping request this summary belongs to.
    pub request_id: RequestId,
    pub period_kind: PeriodKind,
    /// Canonical strings of the groups, in output order.
    pub periods: Vec<String>,
    pub record_count: usize,
    /// Counts summed across every group, form and month.
    pub totals: Counts,
    pub grouped_at: Timestamp,
}

domain_event!(
    CompletenessGrouped,
    event_type = "completeness.grouped.v1",
    schema_version = 1,
    aggregate_id = request_id,
    aggregate_type = "Completeness",
    occurred_at = grouped_at,
    event_id = event_id
);
