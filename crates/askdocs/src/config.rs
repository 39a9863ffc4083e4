//! Configuration for the query service
//!
//! All values are read once from the environment at process start. There is
//! no hot-reload.

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{Error, Result};

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// OpenAI configuration (embeddings + generation)
    pub openai: OpenAiConfig,
    /// Pinecone configuration (vector search)
    pub pinecone: PineconeConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            openai: OpenAiConfig::default(),
            pinecone: PineconeConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// `OPENAI_API_KEY` and `PINECONE_API_KEY` are required; everything else
    /// falls back to defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        config.openai.api_key = require_env("OPENAI_API_KEY")?;
        config.pinecone.api_key = require_env("PINECONE_API_KEY")?;

        if let Ok(index) = env::var("PINECONE_INDEX") {
            config.pinecone.index = index;
        }
        if let Ok(host) = env::var("HOST") {
            config.server.host = host;
        }
        config.server.port = parse_port(env::var("PORT").ok())?;
        config.server.allowed_origins = parse_origins(env::var("ALLOWED_ORIGINS").ok());

        if let Ok(model) = env::var("EMBED_MODEL") {
            config.openai.embed_model = model;
        }
        if let Ok(model) = env::var("CHAT_MODEL") {
            config.openai.chat_model = model;
        }
        if let Ok(url) = env::var("OPENAI_BASE_URL") {
            config.openai.base_url = url;
        }
        if let Ok(url) = env::var("PINECONE_CONTROL_PLANE_URL") {
            config.pinecone.control_plane_url = url;
        }
        if let Ok(top_k) = env::var("TOP_K") {
            config.pinecone.top_k = top_k
                .parse()
                .map_err(|_| Error::Config(format!("Invalid TOP_K value: {}", top_k)))?;
        }
        if let Ok(secs) = env::var("REQUEST_TIMEOUT_SECS") {
            config.openai.timeout_secs = secs.parse().map_err(|_| {
                Error::Config(format!("Invalid REQUEST_TIMEOUT_SECS value: {}", secs))
            })?;
        }
        if let Ok(retries) = env::var("MAX_RETRIES") {
            config.openai.max_retries = retries
                .parse()
                .map_err(|_| Error::Config(format!("Invalid MAX_RETRIES value: {}", retries)))?;
        }

        Ok(config)
    }
}

fn require_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("{} must be set", name)))
}

/// Parse the listen port. Unset defaults to 8000; an unparseable value is a
/// startup error rather than a silent fallback.
pub(crate) fn parse_port(value: Option<String>) -> Result<u16> {
    match value {
        None => Ok(8000),
        Some(raw) => raw
            .parse()
            .map_err(|_| Error::Config(format!("Invalid PORT value: {}", raw))),
    }
}

/// Parse the CORS allow-list. Unset or empty means wildcard.
pub(crate) fn parse_origins(value: Option<String>) -> Vec<String> {
    match value {
        None => vec!["*".to_string()],
        Some(raw) => {
            let origins: Vec<String> = raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if origins.is_empty() {
                vec!["*".to_string()]
            } else {
                origins
            }
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// CORS allow-list; a single "*" entry permits all origins.
    /// The wildcard default is for development only.
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// True if the CORS policy is the development wildcard
    pub fn cors_wildcard(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origins: vec!["*".to_string()],
        }
    }
}

/// OpenAI configuration (embeddings and answer generation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API key
    pub api_key: String,
    /// API base URL
    pub base_url: String,
    /// Embedding model name
    pub embed_model: String,
    /// Generation model name
    pub chat_model: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Number of retries for failed requests (0 = fail on first error)
    pub max_retries: u32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com".to_string(),
            embed_model: "text-embedding-3-large".to_string(),
            chat_model: "gpt-3.5-turbo".to_string(),
            temperature: 0.0,
            timeout_secs: 120,
            max_retries: 0,
        }
    }
}

/// Pinecone configuration (vector search against one fixed named index)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PineconeConfig {
    /// API key
    pub api_key: String,
    /// Control plane URL (index description)
    pub control_plane_url: String,
    /// Index name
    pub index: String,
    /// Number of passages to retrieve per query
    pub top_k: usize,
}

impl Default for PineconeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            control_plane_url: "https://api.pinecone.io".to_string(),
            index: "alloraproduction".to_string(),
            top_k: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), 8000);
    }

    #[test]
    fn test_port_parses_numeric_value() {
        assert_eq!(parse_port(Some("9001".to_string())).unwrap(), 9001);
    }

    #[test]
    fn test_port_rejects_garbage() {
        let err = parse_port(Some("eight thousand".to_string())).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_origins_default_to_wildcard() {
        assert_eq!(parse_origins(None), vec!["*".to_string()]);
        assert_eq!(parse_origins(Some("".to_string())), vec!["*".to_string()]);
    }

    #[test]
    fn test_origins_split_and_trimmed() {
        let origins = parse_origins(Some(
            "https://app.example.com, https://staging.example.com".to_string(),
        ));
        assert_eq!(
            origins,
            vec![
                "https://app.example.com".to_string(),
                "https://staging.example.com".to_string(),
            ]
        );
    }

    #[test]
    fn test_wildcard_detection() {
        let config = ServerConfig::default();
        assert!(config.cors_wildcard());

        let config = ServerConfig {
            allowed_origins: vec!["https://app.example.com".to_string()],
            ..Default::default()
        };
        assert!(!config.cors_wildcard());
    }
}
