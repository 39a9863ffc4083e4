//! Retrieved passage type

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A unit of evidence returned by the vector-search provider.
///
/// Metadata is an arbitrary key-value bag; only the `source` key is consulted
/// by this service, and it is required by convention rather than schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedPassage {
    /// Passage text
    pub content: String,
    /// Metadata attached to the stored vector
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl RetrievedPassage {
    /// Create a passage with content and no metadata
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Attach a source identifier
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.metadata.insert(
            "source".to_string(),
            serde_json::Value::String(source.into()),
        );
        self
    }

    /// The source identifier for citation. A passage without a `source`
    /// metadata field (or a non-string value) yields the empty string.
    pub fn source(&self) -> &str {
        self.metadata
            .get("source")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_metadata() {
        let passage = RetrievedPassage::new("Paris is the capital.").with_source("geo.txt");
        assert_eq!(passage.source(), "geo.txt");
    }

    #[test]
    fn test_missing_source_is_empty_string() {
        let passage = RetrievedPassage::new("orphan passage");
        assert_eq!(passage.source(), "");
    }

    #[test]
    fn test_non_string_source_is_empty_string() {
        let mut passage = RetrievedPassage::new("odd metadata");
        passage
            .metadata
            .insert("source".to_string(), serde_json::json!(42));
        assert_eq!(passage.source(), "");
    }
}
