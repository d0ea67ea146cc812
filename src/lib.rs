#![deny(missing_docs)]

//! Core library for the ragline query-chat client.

/// Chat turn orchestration and rendering.
pub mod chat;
/// Extractive answer composition pipeline.
pub mod compose;
/// Environment-driven configuration management.
pub mod config;
/// Structured logging and tracing setup.
pub mod logging;
/// Retrieval API client and wire types.
pub mod retrieval;
