use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Rejected CLI input. Each variant names the value that failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is not valid: expected a date in the form YYYYMMDDHH")]
    InvalidDate(String),

    #[error("{0} is not valid: date cannot be in the future")]
    FutureDate(String),

    #[error("{0} is not valid: expected 'sst' or 't<depth>' with a positive depth")]
    InvalidProfile(String),

    #[error("{0} is not valid: sea level pressure must be greater than zero")]
    InvalidPressure(String),
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Error {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to send request to {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse backend response as JSON")]
    Decode(#[source] serde_json::Error),
}

impl BackendError {
    /// HTTP status code when the backend answered with a non-success status.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            BackendError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("Backend response is missing field '{0}'")]
    MissingField(&'static str),
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create directory '{0}'")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("Failed to access ledger file '{0}'")]
    LedgerIo(PathBuf, #[source] std::io::Error),

    #[error("Failed to write ledger row to '{0}'")]
    LedgerCsv(PathBuf, #[source] csv::Error),

    #[error("Failed to write run log '{0}'")]
    LogIo(PathBuf, #[source] std::io::Error),

    #[error("Failed to serialize run log '{0}'")]
    LogJson(PathBuf, #[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
