//! Error types for bearer token validation
//!
//! Every failure in the pipeline is returned as a value. Errors raised by the
//! token library and by key resolvers are kept as `source()` so callers can
//! log the underlying cause.

use thiserror::Error;

/// Errors returned by [`JwtValidator`](crate::JwtValidator)
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Extraction Errors
    // ============================================================================
    #[error("Error extracting token: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Token not found")]
    TokenNotFound,

    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Verification Errors
    // ============================================================================
    /// Malformed token, bad signature or failed claim check
    #[error("Error parsing token: {0}")]
    Parse(#[from] jsonwebtoken::errors::Error),

    /// The key resolver rejected the token header
    ///
    /// This happens during verification, before the signature is checked.
    /// Callers that only distinguish "could not parse or verify" from the
    /// other failure kinds should treat it the same as [`Error::Parse`].
    #[error("Error resolving verification key: {0}")]
    KeyResolution(#[from] KeyError),

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Invalid token algorithm. Wanted {expected}, got {found}")]
    AlgorithmMismatch { expected: String, found: String },

    #[error("Algorithm '{0}' is not supported")]
    AlgorithmUnsupported(String),

    #[error("The 'none' algorithm is rejected for security reasons (RFC 8725)")]
    AlgorithmNoneRejected,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid configuration: {0}")]
    ConfigurationInvalid(String),
}

/// Errors returned by token extractors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Authorization header format must be 'Bearer <token>'")]
    InvalidFormat,

    #[error("{0}")]
    Other(String),
}

impl ExtractError {
    /// Failure raised by a custom extractor
    pub fn other(msg: impl Into<String>) -> Self {
        ExtractError::Other(msg.into())
    }
}

/// Errors returned by key resolvers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Token header has no key id (kid)")]
    MissingKeyId,

    #[error("Unknown key id '{0}'")]
    UnknownKeyId(String),

    #[error("{0}")]
    Other(String),
}

impl KeyError {
    /// Failure raised by a custom resolver
    pub fn other(msg: impl Into<String>) -> Self {
        KeyError::Other(msg.into())
    }
}

/// Result type alias for jwtbearer operations
pub type Result<T> = std::result::Result<T, Error>;
