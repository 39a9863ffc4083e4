//! askdocs: HTTP question-answering over an existing vector index
//!
//! The service receives a question, embeds it with a hosted embedding API,
//! retrieves the most similar passages from a hosted vector index, asks a
//! hosted language model to synthesize an answer grounded in those passages,
//! and returns the answer together with the distinct set of source
//! identifiers. Indexing, similarity search, and generation all live with
//! the providers; this crate is the sequencing and the HTTP surface.

pub mod config;
pub mod error;
pub mod generation;
pub mod providers;
pub mod server;
pub mod types;

pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use types::{ChatRequest, ChatResponse, RetrievedPassage};
