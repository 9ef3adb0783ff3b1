//! Error types for telemetry batch processing.

use thiserror::Error;

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for batch processing.
///
/// Every variant is scoped to a single payload. Rejecting one payload
/// never affects the processing of any other.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Payload is not a valid batch encoding.
    #[error("malformed batch payload: {0}")]
    Decode(#[from] prost::DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_names_the_payload() {
        let err = CoreError::from(prost::DecodeError::new("buffer underflow"));
        assert!(err.to_string().starts_with("malformed batch payload"));
    }
}
