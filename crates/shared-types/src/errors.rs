//! # Error Types
//!
//! Defines the codec error shared by every crate that touches wire bytes.

use thiserror::Error;

/// Errors raised while decoding wire messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Bytes could not be parsed as the named message.
    #[error("Could not decode {what}: {reason}")]
    Decode {
        /// Message type that failed to decode.
        what: &'static str,
        /// Underlying decoder message.
        reason: String,
    },
}
