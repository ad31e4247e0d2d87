//! Crate-wide error type.
//!
//! Every failed fetch surfaces one of these variants; none of them are
//! recovered inside the cache. `Display` messages match the original's
//! diagnostic strings where the original names one verbatim
//! (e.g. `"PEM_read_bio_PrivateKey() failed"`), so operators grepping logs
//! see the same text they would from nginx.

use thiserror::Error;

/// Errors produced by identity normalization, byte-source creation, or a
/// kind adapter's `create`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Identity construction failed: bad `engine:` syntax or path
    /// resolution failure.
    #[error("{0}")]
    Identity(String),

    /// Opening the byte source for an identity failed (file not found,
    /// permission denied, in-memory buffer allocation failed).
    #[error("{0}")]
    SourceOpen(String),

    /// PEM/DER decoding failed, wrong object type, or an encrypted key
    /// with no matching passphrase.
    #[error("{0}")]
    Parse(String),

    /// An `engine:` key could not be loaded.
    #[error("{0}")]
    Engine(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;
