//! One-turn orchestration for the query-chat surface.
//!
//! A turn is retrieve-then-compose: the question goes to the retrieval API,
//! and the returned passages are composed into a short answer client-side.
//! Turns are independent; nothing is shared between invocations beyond the
//! HTTP connection pool.

use crate::compose;
use crate::config::{Config, DEFAULT_RESULT_LIMIT};
use crate::retrieval::{QueryRequest, RetrievalClient, RetrievalError, RetrievedPassage};

/// Result of one completed chat turn.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    /// Question exactly as the user submitted it.
    pub question: String,
    /// Composed answer string, always non-empty.
    pub answer: String,
    /// Passages backing the answer, for the sources display.
    pub sources: Vec<RetrievedPassage>,
    /// Server-side query reformulation, shown for transparency only.
    pub rewritten: Option<String>,
}

/// Runs retrieve-then-compose for each submitted question.
pub struct ChatService<C: RetrievalClient> {
    client: C,
    dataset_ids: Option<Vec<String>>,
    limit: usize,
    rewrite: bool,
}

impl<C: RetrievalClient> ChatService<C> {
    /// Build a service using the configured query defaults.
    pub fn new(client: C, config: &Config) -> Self {
        Self {
            client,
            dataset_ids: config.dataset_ids.clone(),
            limit: config.result_limit.unwrap_or(DEFAULT_RESULT_LIMIT),
            rewrite: config.query_rewrite.unwrap_or(true),
        }
    }

    /// Run a single chat turn. Retrieval failures propagate; composition is total.
    pub async fn run_turn(&self, question: &str) -> Result<ChatTurn, RetrievalError> {
        let request = QueryRequest {
            query: question.to_string(),
            dataset_ids: self.dataset_ids.clone(),
            k: self.limit,
            rewrite: self.rewrite,
        };
        let response = self.client.query(request).await?;
        let answer = compose::compose_answer(question, &response.results);
        tracing::debug!(
            passages = response.results.len(),
            rewritten = response.rewritten.is_some(),
            "Composed answer for chat turn"
        );

        Ok(ChatTurn {
            question: question.to_string(),
            answer,
            sources: response.results,
            rewritten: response.rewritten,
        })
    }
}

/// Format a completed turn for the chat surface: answer, interpretation, sources.
pub fn render_turn(turn: &ChatTurn) -> String {
    let mut out = turn.answer.clone();

    if let Some(rewritten) = &turn.rewritten
        && rewritten != &turn.question
    {
        out.push_str("\n(interpreted as: ");
        out.push_str(rewritten);
        out.push(')');
    }

    if !turn.sources.is_empty() {
        out.push_str("\nSources:");
        for (index, source) in turn.sources.iter().enumerate() {
            out.push_str(&format!(
                "\n  [{}] document {} (dataset {}, score {:.3})",
                index + 1,
                source.document_id,
                source.dataset_id,
                source.score
            ));
        }
    }

    out
}

/// Format a retrieval failure for the chat surface, carrying the upstream detail.
pub fn render_failure(error: &RetrievalError) -> String {
    format!("Query failed: {error}")
}
