//! Error types for `clef-kdf-core`.

use thiserror::Error;

/// Errors produced by key-derivation and stored-hash operations.
#[derive(Debug, Error)]
pub enum KdfError {
    /// Cost parameters out of range (N not a power of two, N/r/p or
    /// iteration-count bounds violated).
    #[error("invalid cost parameters: {0}")]
    InvalidCostParameters(String),

    /// Requested derived-key length exceeds the PRF-imposed ceiling.
    #[error("derived key too long: {0}")]
    KeyLengthTooLarge(String),

    /// Stored encoding is structurally invalid (field count, hex cost field,
    /// base64 payload).
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    /// Algorithm index in a stored encoding has no registered HMAC variant.
    #[error("unsupported algorithm index {0}")]
    UnsupportedAlgorithm(u32),
}
