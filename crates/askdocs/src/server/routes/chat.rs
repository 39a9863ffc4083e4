//! Chat endpoint: embed, retrieve, synthesize, cite

use axum::{extract::State, Json};
use std::collections::BTreeSet;

use crate::error::Result;
use crate::generation::PromptBuilder;
use crate::server::state::AppState;
use crate::types::{ChatRequest, ChatResponse, RetrievedPassage};

/// POST /chat - answer a question grounded in retrieved passages.
///
/// The three provider calls run sequentially; each depends on the previous
/// step's output, and a failure at any stage stops the pipeline.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    tracing::info!("Chat question: \"{}\"", request.message);

    let embedding = state.embedder().embed(&request.message).await?;

    let passages = state.vector_search().query(&embedding).await?;
    tracing::info!("Retrieved {} passages", passages.len());

    let context = PromptBuilder::build_context(&passages);
    let prompt = PromptBuilder::build_qa_prompt(&request.message, &context);
    let answer = state.llm().complete(&prompt).await?;

    let sources = collect_sources(&passages);
    tracing::info!("Answer generated, {} distinct sources", sources.len());

    Ok(Json(ChatResponse {
        response: answer,
        sources,
    }))
}

/// Collect the distinct source identifiers from the passages consulted for
/// one request. A passage without a `source` metadata field contributes the
/// empty string. Sorted for a deterministic response body.
fn collect_sources(passages: &[RetrievedPassage]) -> Vec<String> {
    let distinct: BTreeSet<String> = passages.iter().map(|p| p.source().to_string()).collect();
    distinct.into_iter().collect()
}
