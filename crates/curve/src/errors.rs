//! Error types for curve operations

use thiserror::Error;

/// Main error type for scalar and point operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Encoded input has the wrong length
    #[error("Invalid encoding length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Scalar bytes encode a value >= the group order
    #[error("Scalar encoding is not canonical")]
    NonCanonicalScalar,

    /// Bytes do not decompress to a valid group element
    #[error("Invalid point encoding")]
    InvalidPointEncoding,

    /// Hex text could not be decoded
    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Multiplicative inverse of zero requested
    #[error("The zero scalar has no multiplicative inverse")]
    ZeroInversion,
}

/// Result type for curve operations
pub type CurveResult<T> = Result<T, CurveError>;
