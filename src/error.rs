//! Error types for the SCHA library.

use thiserror::Error;

/// Errors produced by the SCHA library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchaError {
    /// Hash length must be at least one output unit.
    #[error("Hash length must be a positive integer, got {length}")]
    InvalidHashLength { length: usize },
    /// Variant name does not match any known output configuration.
    #[error("Unknown hash variant '{0}' (expected byte-hex, wide-hex or small-alphabet)")]
    UnknownVariant(String),
}
