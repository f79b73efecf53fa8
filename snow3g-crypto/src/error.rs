//! Error types for the SNOW 3G engine

use std::fmt;

use thiserror::Error;

/// Which caller-supplied input failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// The 128-bit cipher key
    Key,
    /// The 128-bit initialization vector
    Iv,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Key => write!(f, "key"),
            InputKind::Iv => write!(f, "IV"),
        }
    }
}

/// Errors reported by the SNOW 3G engine.
///
/// All errors are detected before any state is touched, so a failed call
/// leaves the engine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Snow3gError {
    /// Key or IV is not exactly 16 bytes
    #[error("invalid {input} length: expected {expected} bytes, got {actual}")]
    InvalidInputLength {
        /// Offending input
        input: InputKind,
        /// Required length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Keystream requested before a successful initialization
    #[error("SNOW 3G engine is not initialized")]
    EngineNotInitialized,
}

/// Result type for SNOW 3G operations
pub type Result<T> = std::result::Result<T, Snow3gError>;
