//! Application handlers.
//!
//! Query handlers that orchestrate domain operations over the ports.

pub mod completeness;

pub use completeness::{
    GroupCompletenessHandler, GroupCompletenessQuery, GroupCompletenessResult,
};
