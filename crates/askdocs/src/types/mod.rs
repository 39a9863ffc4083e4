//! Core types for the query service

pub mod passage;

use serde::{Deserialize, Serialize};

pub use passage::RetrievedPassage;

/// Incoming chat request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The question to answer. Any string is accepted and forwarded as-is.
    pub message: String,
}

/// Response to a chat request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated answer (may be empty if the model returned empty output)
    pub response: String,
    /// Distinct source identifiers from the passages consulted for this
    /// request, in sorted order
    pub sources: Vec<String>,
}
