//! HTTP client wrapper for the platform's query endpoint.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;

use super::types::{QueryRequest, QueryResponse, RetrievalError};

/// Interface implemented by retrieval backends.
///
/// The chat service only needs this seam; tests substitute canned responses and
/// alternative transports can be added without touching composition.
#[async_trait]
pub trait RetrievalClient: Send + Sync {
    /// Execute one retrieval request and decode the passage list.
    async fn query(&self, request: QueryRequest) -> Result<QueryResponse, RetrievalError>;
}

/// Reqwest-backed client talking to the platform's REST API.
#[derive(Debug)]
pub struct HttpRetrievalClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpRetrievalClient {
    /// Construct a new client from the loaded configuration.
    pub fn new(config: &Config) -> Result<Self, RetrievalError> {
        let client = Client::builder().user_agent("ragline/0.1").build()?;
        let base_url = normalize_base_url(&config.api_url).map_err(RetrievalError::InvalidUrl)?;
        tracing::debug!(
            url = %base_url,
            has_api_key = %config
                .api_key
                .as_deref()
                .map(|value| !value.is_empty())
                .unwrap_or(false),
            "Initialized retrieval HTTP client"
        );

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/query", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl RetrievalClient for HttpRetrievalClient {
    async fn query(&self, request: QueryRequest) -> Result<QueryResponse, RetrievalError> {
        let mut builder = self.client.post(self.endpoint()).json(&request);
        if let Some(api_key) = &self.api_key
            && !api_key.is_empty()
        {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let error = RetrievalError::UnexpectedStatus { status, body };
            tracing::error!(error = %error, "Query request failed");
            return Err(error);
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|error| RetrievalError::MalformedResponse(error.to_string()))
    }
}

fn normalize_base_url(url: &str) -> Result<String, String> {
    let mut parsed = reqwest::Url::parse(url).map_err(|err| err.to_string())?;
    let path = parsed.path().trim_end_matches('/').to_string();
    parsed.set_path(&path);
    Ok(parsed.to_string())
}
