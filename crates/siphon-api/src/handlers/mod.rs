//! HTTP request handlers for the siphon API.
//!
//! Handlers follow a consistent pattern:
//! - Method and input validation before any processing
//! - Tracing for observability
//! - Errors converted to HTTP status codes at this boundary; nothing
//!   propagates further

pub mod ingest;

// Re-export handlers for convenient access
pub use ingest::ingest_batch;
