//! EventSubscriber port - Interface for subscribing to domain events.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler for processing domain events.
///
/// # Example
///
/// ```ignore
/// struct GroupingAudit { /* ... */ }
///
/// #[async_trait]
/// impl EventHandler for GroupingAudit {
///     async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
///         let grouped: CompletenessGrouped = event.payload_as()?;
///         // Record the summary...
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "GroupingAudit"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Process an event. A failure does not stop delivery to other handlers.
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Handler name used in log fields.
    fn name(&self) -> &'static str;
}

/// Port for subscribing to domain events.
///
/// Handlers register interest in an event type (the topic) and are invoked
/// for every matching publish.
pub trait EventSubscriber: Send + Sync {
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Subscribe one handler to several event types.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}

/// Combined trait for event bus implementations.
pub trait EventBus: super::EventPublisher + EventSubscriber {}

impl<T: super::EventPublisher + EventSubscriber> EventBus for T {}
