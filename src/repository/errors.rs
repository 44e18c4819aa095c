use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    /// Maps a non-success status and its body to an error.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::NOT_FOUND => RepositoryError::NotFound,
            _ => RepositoryError::Rejected {
                status: status.as_u16(),
                message: rejection_message(status, &body),
            },
        }
    }
}

/// Reason shown for a refused request: the `message` field of a JSON body,
/// a plain-text body as is, otherwise the status reason phrase.
fn rejection_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    let fallback = || status.canonical_reason().unwrap_or("Request rejected").to_string();

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        return value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(fallback);
    }

    if body.is_empty() || body.starts_with('<') {
        fallback()
    } else {
        body.to_string()
    }
}

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            RepositoryError::ConnectionError(err.to_string())
        } else if err.is_decode() {
            RepositoryError::InvalidResponse(err.to_string())
        } else if err.is_builder() {
            RepositoryError::ValidationError(err.to_string())
        } else if let Some(status) = err.status() {
            RepositoryError::from_status(status, err.to_string())
        } else {
            RepositoryError::Unexpected(err.to_string())
        }
    }
}
