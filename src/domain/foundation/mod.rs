//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, error types and the event
//! infrastructure used by the period and completeness modules.

mod errors;
mod events;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use crate::domain_event;
pub use events::{
    DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::RequestId;
pub use timestamp::Timestamp;
