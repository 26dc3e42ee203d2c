//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, events)
//! - `period` - Period identifiers: parsing, conversion, navigation, comparison
//! - `completeness` - Grouping of completeness records by coarse period

pub mod completeness;
pub mod foundation;
pub mod period;
