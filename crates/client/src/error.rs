use contracts::ValidationError;
use thiserror::Error;

/// Errors from talking to the backend.
///
/// Write-path callers typically treat `Status` as a benign degradation (the
/// follow-up refresh simply shows the old list); read-path callers surface
/// it. `Decode` means the backend answered 2xx but the body failed the
/// entity schema, which on read paths is a contract violation.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response failed validation: {0}")]
    Decode(#[from] ValidationError),
}

impl RequestError {
    /// HTTP status of the failure, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
