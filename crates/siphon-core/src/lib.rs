//! Core domain types for binary device telemetry.
//!
//! Provides the canonical identifier codec, the batch wire schema and its
//! decoder, and the emission sink abstraction. The HTTP crate depends on
//! these foundational types; none of them perform I/O beyond the sink
//! implementations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod guid;
pub mod models;
pub mod sink;
pub mod wire;

pub use error::{CoreError, Result};
pub use guid::DeviceGuid;
pub use models::{DeviceRecord, Measurement, ObisCode};
pub use sink::{NoOpSink, TelemetrySink, TracingSink};
pub use wire::decode_batch;
