//! Telemetry emission sink.
//!
//! Decoded identifiers and measurements leave the service as log lines.
//! The sink is an explicit collaborator handed to the HTTP layer at
//! construction time, so core components never consult ambient logger
//! state and tests can capture emission directly.

use std::fmt;

/// Append-only line sink for decoded telemetry.
///
/// Implementations must serialize concurrent writes so lines never
/// interleave.
pub trait TelemetrySink: Send + Sync + fmt::Debug {
    /// Writes one complete line.
    fn write_line(&self, line: &str);
}

/// Production sink emitting through `tracing` under the `telemetry` target.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the tracing-backed sink.
    pub fn new() -> Self {
        Self
    }
}

impl TelemetrySink for TracingSink {
    fn write_line(&self, line: &str) {
        tracing::info!(target: "telemetry", "{line}");
    }
}

/// Sink that discards every line.
///
/// Used when emission is disabled and in tests that only exercise the
/// HTTP surface.
#[derive(Debug, Default)]
pub struct NoOpSink;

impl NoOpSink {
    /// Creates a discarding sink.
    pub fn new() -> Self {
        Self
    }
}

impl TelemetrySink for NoOpSink {
    fn write_line(&self, _line: &str) {}
}
