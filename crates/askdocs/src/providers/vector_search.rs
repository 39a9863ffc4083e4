//! Vector search provider trait

use async_trait::async_trait;

use crate::error::Result;
use crate::types::RetrievedPassage;

/// Trait for nearest-neighbor search against one fixed named index.
///
/// How many passages come back and which similarity metric is used are the
/// provider's policy; the service imposes no filtering or re-ranking of its
/// own.
///
/// Implementations:
/// - `PineconeVectorSearch`: hosted Pinecone index
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VectorSearchProvider: Send + Sync {
    /// Retrieve the most similar stored passages for a query embedding,
    /// ordered by the provider's similarity ranking
    async fn query(&self, embedding: &[f32]) -> Result<Vec<RetrievedPassage>>;

    /// Name of the index this provider is bound to
    fn index_name(&self) -> &str;

    /// Get provider name for logging
    fn name(&self) -> &str;
}
