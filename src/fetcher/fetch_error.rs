use thiserror::Error;

/// Failures at the retrieval boundary. Any of these means "no data" for
/// the current refresh cycle.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Webhook returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}
