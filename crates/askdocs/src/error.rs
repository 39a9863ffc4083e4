//! Error types for the query service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Query service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Embedding error
    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    /// Vector search error
    #[error("Retrieval failed: {0}")]
    Retrieval(String),

    /// LLM answer generation error
    #[error("Answer synthesis failed: {0}")]
    Synthesis(String),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an embedding error
    pub fn embedding(message: impl Into<String>) -> Self {
        Self::Embedding(message.into())
    }

    /// Create a retrieval error
    pub fn retrieval(message: impl Into<String>) -> Self {
        Self::Retrieval(message.into())
    }

    /// Create a synthesis error
    pub fn synthesis(message: impl Into<String>) -> Self {
        Self::Synthesis(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Every request-path failure collapses to a single 500 shape; the
        // stage is only visible in the error type string.
        let error_type = match &self {
            Error::Config(_) => "config_error",
            Error::Embedding(_) => "embedding_error",
            Error::Retrieval(_) => "retrieval_error",
            Error::Synthesis(_) => "synthesis_error",
            Error::Http(_) => "http_error",
            Error::Json(_) => "json_error",
            Error::Internal(_) => "internal_error",
        };

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_cause() {
        let err = Error::embedding("provider unavailable");
        assert_eq!(
            err.to_string(),
            "Embedding generation failed: provider unavailable"
        );

        let err = Error::retrieval("index missing");
        assert!(err.to_string().contains("index missing"));
    }

    #[test]
    fn test_all_request_errors_map_to_500() {
        for err in [
            Error::embedding("x"),
            Error::retrieval("x"),
            Error::synthesis("x"),
            Error::internal("x"),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
