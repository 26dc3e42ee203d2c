//! Event bus adapters.
//!
//! - `InMemoryEventBus` - In-process pub/sub with a log of published events

mod in_memory;

pub use in_memory::InMemoryEventBus;
