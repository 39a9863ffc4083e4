//! Provider abstractions for embeddings, vector search, and answer generation
//!
//! The service owns no retrieval or generation logic itself; these traits are
//! the seams to the hosted providers, injected into the server state at
//! startup so tests can substitute mock implementations.

pub mod embedding;
pub mod llm;
pub mod openai;
pub mod pinecone;
pub mod vector_search;

pub use embedding::EmbeddingProvider;
pub use llm::LlmProvider;
pub use vector_search::VectorSearchProvider;
