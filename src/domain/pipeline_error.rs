use thiserror::Error;

/// Caller-contract violations. These are bugs in the request, not in the
/// data, so they fail fast instead of being ignored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("unknown sort key '{0}' (expected price, bedrooms or address)")]
    InvalidSortKey(String),
    #[error("invalid filter: {0}")]
    InvalidFilterSpec(String),
    #[error("page size must be at least 1")]
    InvalidPageSize,
}
