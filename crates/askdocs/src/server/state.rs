//! Application state for the query service

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::error::Result;
use crate::providers::{
    openai::{OpenAiClient, OpenAiEmbedder, OpenAiLlm},
    pinecone::PineconeVectorSearch,
    EmbeddingProvider, LlmProvider, VectorSearchProvider,
};

/// Shared application state.
///
/// Provider handles are constructed once at startup, are immutable, and are
/// shared across all requests. Per-request data never touches this state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServiceConfig,
    embedder: Arc<dyn EmbeddingProvider>,
    vector_search: Arc<dyn VectorSearchProvider>,
    llm: Arc<dyn LlmProvider>,
}

impl AppState {
    /// Initialize state against the hosted providers.
    ///
    /// Connecting to the vector index is the fatal startup check: if the
    /// index cannot be described the whole service fails to start.
    pub async fn initialize(config: ServiceConfig) -> Result<Self> {
        tracing::info!("Initializing query service state...");

        let openai = Arc::new(OpenAiClient::new(&config.openai)?);
        tracing::info!(
            "OpenAI client initialized (embeddings: {}, generation: {})",
            config.openai.embed_model,
            config.openai.chat_model
        );

        let vector_search = PineconeVectorSearch::connect(&config.pinecone).await?;
        tracing::info!("Vector search initialized (index: {})", config.pinecone.index);

        let embedder = Arc::new(OpenAiEmbedder::from_client(Arc::clone(&openai)));
        let llm = Arc::new(OpenAiLlm::from_client(
            openai,
            config.openai.chat_model.clone(),
        ));

        Ok(Self::with_providers(
            config,
            embedder,
            Arc::new(vector_search),
            llm,
        ))
    }

    /// Build state from explicit provider handles. Tests substitute mocks
    /// through this constructor.
    pub fn with_providers(
        config: ServiceConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        vector_search: Arc<dyn VectorSearchProvider>,
        llm: Arc<dyn LlmProvider>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                embedder,
                vector_search,
                llm,
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &ServiceConfig {
        &self.inner.config
    }

    /// Get embedding provider
    pub fn embedder(&self) -> &Arc<dyn EmbeddingProvider> {
        &self.inner.embedder
    }

    /// Get vector search provider
    pub fn vector_search(&self) -> &Arc<dyn VectorSearchProvider> {
        &self.inner.vector_search
    }

    /// Get LLM provider
    pub fn llm(&self) -> &Arc<dyn LlmProvider> {
        &self.inner.llm
    }
}
