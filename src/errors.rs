// errors.rs
use crate::domain::PipelineError;
use crate::spreadsheets::ExportError;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad query strings) or the layers below it.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) | ServerError::Pipeline(_) => 400,
            ServerError::Export(_) | ServerError::InternalError => 500,
        }
    }
}
