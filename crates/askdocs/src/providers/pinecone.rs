//! Pinecone vector search provider
//!
//! Queries one fixed named index. The index host is resolved through the
//! control plane at startup; if the index cannot be described the service
//! refuses to start.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::config::PineconeConfig;
use crate::error::{Error, Result};
use crate::types::RetrievedPassage;

use super::vector_search::VectorSearchProvider;

const API_KEY_HEADER: &str = "Api-Key";

/// Metadata key holding the passage text, matching the key used at indexing
/// time.
const TEXT_KEY: &str = "text";

/// Pinecone vector search bound to a single index
pub struct PineconeVectorSearch {
    client: Client,
    api_key: String,
    index_name: String,
    /// Data plane host for the index, resolved at startup
    host: String,
    top_k: usize,
}

#[derive(Deserialize)]
struct DescribeIndexResponse {
    host: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    vector: &'a [f32],
    top_k: usize,
    include_metadata: bool,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<Match>,
}

#[derive(Deserialize)]
struct Match {
    #[serde(default)]
    metadata: Option<HashMap<String, serde_json::Value>>,
}

impl PineconeVectorSearch {
    /// Connect to the configured index.
    ///
    /// Resolves the index host via the control plane and fails if the index
    /// is unreachable. This is the fatal startup check: the process must not
    /// come up against a missing index.
    pub async fn connect(config: &PineconeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        let url = format!("{}/indexes/{}", config.control_plane_url, config.index);

        let response = client
            .get(&url)
            .header(API_KEY_HEADER, &config.api_key)
            .send()
            .await
            .map_err(|e| {
                Error::Config(format!(
                    "Error connecting to Pinecone index '{}': {}",
                    config.index, e
                ))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Config(format!(
                "Error connecting to Pinecone index '{}': HTTP {} - {}",
                config.index, status, body
            )));
        }

        let description: DescribeIndexResponse = response.json().await.map_err(|e| {
            Error::Config(format!("Failed to parse index description: {}", e))
        })?;

        tracing::info!(
            "Connected to Pinecone index '{}' at {}",
            config.index,
            description.host
        );

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            index_name: config.index.clone(),
            host: description.host,
            top_k: config.top_k,
        })
    }

    fn query_endpoint(&self) -> String {
        // The control plane returns a bare domain; data plane calls go over
        // HTTPS.
        if self.host.starts_with("http") {
            format!("{}/query", self.host)
        } else {
            format!("https://{}/query", self.host)
        }
    }

    fn match_to_passage(m: Match) -> RetrievedPassage {
        let mut metadata = m.metadata.unwrap_or_default();
        let content = metadata
            .remove(TEXT_KEY)
            .and_then(|v| match v {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .unwrap_or_default();

        RetrievedPassage { content, metadata }
    }
}

#[async_trait]
impl VectorSearchProvider for PineconeVectorSearch {
    async fn query(&self, embedding: &[f32]) -> Result<Vec<RetrievedPassage>> {
        let request = QueryRequest {
            vector: embedding,
            top_k: self.top_k,
            include_metadata: true,
        };

        let response = self
            .client
            .post(self.query_endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Retrieval(format!("Pinecone query failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Retrieval(format!(
                "Pinecone query failed: HTTP {} - {}",
                status, body
            )));
        }

        let query_response: QueryResponse = response.json().await.map_err(|e| {
            Error::Retrieval(format!("Failed to parse Pinecone response: {}", e))
        })?;

        Ok(query_response
            .matches
            .into_iter()
            .map(Self::match_to_passage)
            .collect())
    }

    fn index_name(&self) -> &str {
        &self.index_name
    }

    fn name(&self) -> &str {
        "pinecone"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_to_passage_extracts_text_and_source() {
        let mut metadata = HashMap::new();
        metadata.insert(
            "text".to_string(),
            serde_json::json!("Paris is the capital of France."),
        );
        metadata.insert("source".to_string(), serde_json::json!("geo.txt"));

        let passage = PineconeVectorSearch::match_to_passage(Match {
            metadata: Some(metadata),
        });

        assert_eq!(passage.content, "Paris is the capital of France.");
        assert_eq!(passage.source(), "geo.txt");
        // Text key is lifted into content, not duplicated in metadata
        assert!(!passage.metadata.contains_key("text"));
    }

    #[test]
    fn test_match_without_metadata() {
        let passage = PineconeVectorSearch::match_to_passage(Match { metadata: None });
        assert_eq!(passage.content, "");
        assert_eq!(passage.source(), "");
    }

    #[test]
    fn test_query_request_serializes_camel_case() {
        let vector = vec![0.1_f32, 0.2];
        let request = QueryRequest {
            vector: &vector,
            top_k: 4,
            include_metadata: true,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["topK"], 4);
        assert_eq!(json["includeMetadata"], true);
    }
}
