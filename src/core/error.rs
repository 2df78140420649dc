use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failure classes for one summarization request. Each variant keeps a
/// distinct message so the caller can tell which stage of the pipeline
/// gave up; transient and permanent upstream failures deliberately share
/// the same 500 class, and nothing here is retried.
#[derive(Error, Debug)]
pub enum Error {
    #[error("No transcript provided")]
    EmptyTranscript,

    #[error("Agent not created")]
    AgentUnavailable,

    #[error("Task template error: {0}")]
    Template(String),

    #[error("Agent platform error: {0}")]
    Platform(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Execution did not finish within {deadline_seconds}s")]
    PollTimeout { deadline_seconds: u64 },

    #[error("Request cancelled")]
    Cancelled,

    #[error("Malformed agent output: {0}")]
    MalformedOutput(String),
}

impl Error {
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template(message.into())
    }

    pub fn platform(message: impl Into<String>) -> Self {
        Self::Platform(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedOutput(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Error::EmptyTranscript => StatusCode::BAD_REQUEST,
            Error::AgentUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Platform(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
