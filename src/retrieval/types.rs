//! Wire contract shared with the platform's query endpoint.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors returned while executing a retrieval request.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// Configured API base URL failed to parse or normalize.
    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),
    /// HTTP layer failed before receiving a response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Endpoint responded with a non-success status code.
    #[error("Unexpected query response ({status}): {body}")]
    UnexpectedStatus {
        /// HTTP status returned by the endpoint.
        status: StatusCode,
        /// Body payload associated with the failing response.
        body: String,
    },
    /// Response body did not match the documented schema.
    #[error("Malformed query response: {0}")]
    MalformedResponse(String),
}

/// Parameters for one retrieval request, covering a single chat turn.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    /// Natural language question forwarded to the retrieval pipeline.
    pub query: String,
    /// Optional dataset identifiers scoping the search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_ids: Option<Vec<String>>,
    /// Maximum number of passages to return (`1..=50`).
    pub k: usize,
    /// Whether the server may rewrite the query before searching.
    pub rewrite: bool,
}

/// Response envelope returned by the query endpoint.
///
/// Decoding is fail-closed: a response missing `query` or `results`, or with
/// mistyped fields, is rejected as a whole rather than patched with defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// Original query text echoed back by the server.
    pub query: String,
    /// Server-side reformulation of the query, shown for transparency only.
    #[serde(default)]
    pub rewritten: Option<String>,
    /// Retrieved passages ordered by descending relevance.
    pub results: Vec<RetrievedPassage>,
}

/// One retrieved text span with its relevance score and provenance.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrievedPassage {
    /// Identifier of the stored chunk this passage came from.
    pub chunk_id: String,
    /// Document the passage belongs to.
    pub document_id: String,
    /// Dataset the document belongs to.
    pub dataset_id: String,
    /// Relevance score assigned by the retrieval pipeline.
    pub score: f64,
    /// Passage text used for answer composition.
    pub text: String,
    /// Optional URI of the source document.
    #[serde(default)]
    pub source_uri: Option<String>,
    /// Optional opaque metadata stored alongside the chunk.
    #[serde(default)]
    pub meta: Option<Value>,
}
