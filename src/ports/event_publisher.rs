//! EventPublisher port - Interface for publishing domain events.
//!
//! The publishing half of the pub/sub collaborator. Components receive it as
//! an injected dependency; there is no process-wide bus.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// The envelope's `event_type` is the topic; its `payload` is the message.
///
/// # Example
///
/// ```ignore
/// let envelope = grouped.to_envelope();
/// publisher.publish(envelope).await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event to every subscriber of its type.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish several events in order, stopping at the first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}
