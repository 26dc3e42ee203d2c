//! GroupCompletenessHandler - Query handler for period-grouped completeness.
//!
//! Fetches raw records from the completeness source, folds them into coarse
//! period groups and announces the grouping on the event bus.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::{FeatureFlags, PeriodSettings};
use crate::domain::completeness::{
    CompletenessAggregator, CompletenessGrouped, Counts, FormId, PeriodGroup,
};
use crate::domain::foundation::{
    DomainError, EventId, RequestId, SerializableDomainEvent, Timestamp,
};
use crate::domain::period::PeriodKind;
use crate::ports::{CompletenessQuery, CompletenessReader, EventPublisher};

/// Query to group completeness records by period.
#[derive(Debug, Clone, Default)]
pub struct GroupCompletenessQuery {
    /// Target grouping; the configured default when `None`.
    pub period_kind: Option<PeriodKind>,
    pub form_ids: Vec<FormId>,
    pub org_unit_id: Option<u64>,
    /// Copied onto the published event's metadata.
    pub correlation_id: Option<String>,
}

/// Grouped completeness for one request.
#[derive(Debug, Clone)]
pub struct GroupCompletenessResult {
    pub request_id: RequestId,
    pub period_kind: PeriodKind,
    pub groups: Vec<PeriodGroup>,
}

/// Handler for grouping completeness records.
pub struct GroupCompletenessHandler {
    reader: Arc<dyn CompletenessReader>,
    event_publisher: Arc<dyn EventPublisher>,
    settings: PeriodSettings,
    features: FeatureFlags,
}

impl GroupCompletenessHandler {
    pub fn new(
        reader: Arc<dyn CompletenessReader>,
        event_publisher: Arc<dyn EventPublisher>,
        settings: PeriodSettings,
        features: FeatureFlags,
    ) -> Self {
        Self {
            reader,
            event_publisher,
            settings,
            features,
        }
    }

    /// Fetches, groups and (when enabled) publishes `completeness.grouped.v1`.
    ///
    /// A record with a malformed period fails the whole request with
    /// `INVALID_PERIOD`. A failed publish is logged and does not affect the
    /// returned groups.
    pub async fn handle(
        &self,
        query: GroupCompletenessQuery,
    ) -> Result<GroupCompletenessResult, DomainError> {
        let request_id = RequestId::new();
        let period_kind = query.period_kind.unwrap_or(self.settings.default_grouping);

        debug!(
            %request_id,
            %period_kind,
            forms = query.form_ids.len(),
            "Fetching completeness records"
        );

        let source_query = CompletenessQuery {
            form_ids: query.form_ids,
            org_unit_id: query.org_unit_id,
        };
        let response = self.reader.fetch(&source_query).await?;
        let record_count = response.completeness.len();

        let groups = CompletenessAggregator::group_with(
            &self.settings.codec(),
            &response.completeness,
            period_kind,
        )
        .map_err(|e| {
            warn!(%request_id, error = %e, "Completeness grouping failed");
            DomainError::from(e).with_detail("request_id", request_id.to_string())
        })?;

        info!(
            %request_id,
            %period_kind,
            records = record_count,
            groups = groups.len(),
            "Grouped completeness records"
        );

        if self.features.publish_grouping_events {
            self.publish_summary(request_id, period_kind, record_count, &groups, query.correlation_id)
                .await;
        }

        Ok(GroupCompletenessResult {
            request_id,
            period_kind,
            groups,
        })
    }

    async fn publish_summary(
        &self,
        request_id: RequestId,
        period_kind: PeriodKind,
        record_count: usize,
        groups: &[PeriodGroup],
        correlation_id: Option<String>,
    ) {
        let mut totals = Counts::default();
        for group in groups {
            totals += group.totals();
        }

        let event = CompletenessGrouped {
            event_id: EventId::new(),
            request_id,
            period_kind,
            periods: groups
                .iter()
                .map(|g| g.period.canonical().to_string())
                .collect(),
            record_count,
            totals,
            grouped_at: Timestamp::now(),
        };

        let mut envelope = event.to_envelope();
        if let Some(correlation_id) = correlation_id {
            envelope = envelope.with_correlation_id(correlation_id);
        }

        if let Err(e) = self.event_publisher.publish(envelope).await {
            warn!(%request_id, error = %e, "Failed to publish completeness summary");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::completeness::{CompletenessRecord, CompletenessResponse, Form};
    use crate::domain::foundation::{ErrorCode, EventEnvelope};
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementations
    // ─────────────────────────────────────────────────────────────────────

    struct MockReader {
        records: Vec<CompletenessRecord>,
        should_fail: bool,
        last_query: Mutex<Option<CompletenessQuery>>,
    }

    impl MockReader {
        fn with_records(records: Vec<CompletenessRecord>) -> Self {
            Self {
                records,
                should_fail: false,
                last_query: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                records: Vec::new(),
                should_fail: true,
                last_query: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl CompletenessReader for MockReader {
        async fn fetch(
            &self,
            query: &CompletenessQuery,
        ) -> Result<CompletenessResponse, DomainError> {
            *self.last_query.lock().unwrap() = Some(query.clone());
            if self.should_fail {
                return Err(DomainError::new(
                    ErrorCode::SourceUnavailable,
                    "Simulated failure",
                ));
            }
            Ok(CompletenessResponse {
                completeness: self.records.clone(),
            })
        }
    }

    struct MockPublisher {
        events: Mutex<Vec<EventEnvelope>>,
        should_fail: bool,
    }

    impl MockPublisher {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
                should_fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
                should_fail: true,
            }
        }

        fn events(&self) -> Vec<EventEnvelope> {
            self.events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EventPublisher for MockPublisher {
        async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
            if self.should_fail {
                return Err(DomainError::new(ErrorCode::EventDeliveryFailed, "bus down"));
            }
            self.events.lock().unwrap().push(event);
            Ok(())
        }

        async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
            for event in events {
                self.publish(event).await?;
            }
            Ok(())
        }
    }

    fn records() -> Vec<CompletenessRecord> {
        vec![
            CompletenessRecord::new("202001", Form::new(1, "F"), Counts::new(2, 0, 1)),
            CompletenessRecord::new("202002", Form::new(1, "F"), Counts::new(1, 1, 0)),
            CompletenessRecord::new("202004", Form::new(2, "G"), Counts::new(4, 0, 0)),
        ]
    }

    fn handler(
        reader: Arc<MockReader>,
        publisher: Arc<MockPublisher>,
        features: FeatureFlags,
    ) -> GroupCompletenessHandler {
        GroupCompletenessHandler::new(reader, publisher, PeriodSettings::default(), features)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn groups_by_default_kind() {
        let reader = Arc::new(MockReader::with_records(records()));
        let publisher = Arc::new(MockPublisher::new());
        let handler = handler(reader, publisher, FeatureFlags::default());

        let result = handler.handle(GroupCompletenessQuery::default()).await.unwrap();

        assert_eq!(result.period_kind, PeriodKind::Quarter);
        let periods: Vec<&str> = result.groups.iter().map(|g| g.period.canonical()).collect();
        assert_eq!(periods, vec!["2020Q2", "2020Q1"]);
    }

    #[tokio::test]
    async fn explicit_kind_overrides_default() {
        let reader = Arc::new(MockReader::with_records(records()));
        let publisher = Arc::new(MockPublisher::new());
        let handler = handler(reader, publisher, FeatureFlags::default());

        let query = GroupCompletenessQuery {
            period_kind: Some(PeriodKind::Year),
            ..Default::default()
        };
        let result = handler.handle(query).await.unwrap();

        assert_eq!(result.groups.len(), 1);
        assert_eq!(result.groups[0].period.canonical(), "2020");
        assert_eq!(result.groups[0].forms.len(), 2);
    }

    #[tokio::test]
    async fn passes_filters_to_reader() {
        let reader = Arc::new(MockReader::with_records(Vec::new()));
        let publisher = Arc::new(MockPublisher::new());
        let handler = handler(reader.clone(), publisher, FeatureFlags::default());

        let query = GroupCompletenessQuery {
            form_ids: vec![FormId::new(9)],
            org_unit_id: Some(42),
            ..Default::default()
        };
        handler.handle(query).await.unwrap();

        let seen = reader.last_query.lock().unwrap().clone().unwrap();
        assert_eq!(seen.form_ids, vec![FormId::new(9)]);
        assert_eq!(seen.org_unit_id, Some(42));
    }

    #[tokio::test]
    async fn publishes_summary_event() {
        let reader = Arc::new(MockReader::with_records(records()));
        let publisher = Arc::new(MockPublisher::new());
        let handler = handler(reader, publisher.clone(), FeatureFlags::default());

        let query = GroupCompletenessQuery {
            correlation_id: Some("corr-1".to_string()),
            ..Default::default()
        };
        let result = handler.handle(query).await.unwrap();

        let events = publisher.events();
        assert_eq!(events.len(), 1);
        let envelope = &events[0];
        assert_eq!(envelope.event_type, "completeness.grouped.v1");
        assert_eq!(envelope.aggregate_id, result.request_id.to_string());
        assert_eq!(envelope.metadata.correlation_id.as_deref(), Some("corr-1"));

        let event: CompletenessGrouped = envelope.payload_as().unwrap();
        assert_eq!(event.periods, vec!["2020Q2", "2020Q1"]);
        assert_eq!(event.record_count, 3);
        assert_eq!(event.totals, Counts::new(7, 1, 1));
    }

    #[tokio::test]
    async fn disabled_flag_skips_publishing() {
        let reader = Arc::new(MockReader::with_records(records()));
        let publisher = Arc::new(MockPublisher::new());
        let features = FeatureFlags {
            publish_grouping_events: false,
        };
        let handler = handler(reader, publisher.clone(), features);

        handler.handle(GroupCompletenessQuery::default()).await.unwrap();

        assert!(publisher.events().is_empty());
    }

    #[tokio::test]
    async fn publish_failure_still_returns_groups() {
        let reader = Arc::new(MockReader::with_records(records()));
        let publisher = Arc::new(MockPublisher::failing());
        let handler = handler(reader, publisher, FeatureFlags::default());

        let result = handler.handle(GroupCompletenessQuery::default()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn reader_failure_is_propagated() {
        let reader = Arc::new(MockReader::failing());
        let publisher = Arc::new(MockPublisher::new());
        let handler = handler(reader, publisher.clone(), FeatureFlags::default());

        let err = handler
            .handle(GroupCompletenessQuery::default())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::SourceUnavailable);
        assert!(publisher.events().is_empty());
    }

    #[tokio::test]
    async fn malformed_period_fails_request() {
        let mut bad = records();
        bad.push(CompletenessRecord::new(
            "2020-01",
            Form::new(1, "F"),
            Counts::default(),
        ));
        let reader = Arc::new(MockReader::with_records(bad));
        let publisher = Arc::new(MockPublisher::new());
        let handler = handler(reader, publisher.clone(), FeatureFlags::default());

        let err = handler
            .handle(GroupCompletenessQuery::default())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidPeriod);
        assert!(err.details.contains_key("request_id"));
        assert!(publisher.events().is_empty());
    }

    #[tokio::test]
    async fn week_records_need_week_setting() {
        let week_records = vec![CompletenessRecord::new(
            "2020W05",
            Form::new(1, "F"),
            Counts::new(1, 0, 0),
        )];
        let publisher = Arc::new(MockPublisher::new());

        let strict = handler(
            Arc::new(MockReader::with_records(week_records.clone())),
            publisher.clone(),
            FeatureFlags::default(),
        );
        assert!(strict.handle(GroupCompletenessQuery::default()).await.is_err());

        let settings = PeriodSettings {
            enable_week_periods: true,
            ..Default::default()
        };
        let lenient = GroupCompletenessHandler::new(
            Arc::new(MockReader::with_records(week_records)),
            publisher,
            settings,
            FeatureFlags::default(),
        );
        let result = lenient
            .handle(GroupCompletenessQuery::default())
            .await
            .unwrap();
        assert_eq!(result.groups[0].period.canonical(), "2020Q1");
    }
}
