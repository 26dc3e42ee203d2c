//! Adapters - Implementations of port interfaces.
//!
//! - `events` - Event bus implementations

pub mod events;

pub use events::InMemoryEventBus;
