//! Completeness query handlers.

mod group_completeness;

pub use group_completeness::{
    GroupCompletenessHandler, GroupCompletenessQuery, GroupCompletenessResult,
};
