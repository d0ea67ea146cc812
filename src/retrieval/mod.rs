//! Retrieval API integration: the one asynchronous boundary per chat turn.

mod client;
mod types;

pub use client::{HttpRetrievalClient, RetrievalClient};
pub use types::{QueryRequest, QueryResponse, RetrievalError, RetrievedPassage};
