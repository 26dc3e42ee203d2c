//! CompletenessReader port - source of raw completeness records.

use async_trait::async_trait;

use crate::domain::completeness::{CompletenessResponse, FormId};
use crate::domain::foundation::DomainError;

/// Filters passed to the completeness source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletenessQuery {
    /// Restrict to these forms; empty means all forms.
    pub form_ids: Vec<FormId>,
    pub org_unit_id: Option<u64>,
}

/// Read-only port for completeness data
///
/// Implementations return the body of the completeness endpoint
/// (`{ "completeness": [...] }`) and map transport failures to
/// `ErrorCode::SourceUnavailable`.
#[async_trait]
pub trait CompletenessReader: Send + Sync {
    async fn fetch(&self, query: &CompletenessQuery) -> Result<CompletenessResponse, DomainError>;
}
