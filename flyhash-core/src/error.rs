//! Error taxonomy shared by every fly hash operation.

use thiserror::Error;

/// Errors produced while configuring, hashing, or comparing.
///
/// None of these are retried internally. Every operation is a pure function
/// of its inputs, so the same call fails the same way every time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlyHashError {
    /// Dimensions or fractions rejected at construction time.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What was wrong with the configuration
        reason: String,
    },

    /// Input has fewer bytes than one n-gram window.
    #[error("input too short: {len} bytes, need at least {n_grams} for one n-gram window")]
    InputTooShort {
        /// Bytes supplied
        len: usize,
        /// Configured n-gram width
        n_grams: usize,
    },

    /// Fingerprints of unequal byte length were compared.
    #[error("fingerprint length mismatch: {left} bytes vs {right} bytes")]
    LengthMismatch {
        /// Length of the left operand in bytes
        left: usize,
        /// Length of the right operand in bytes
        right: usize,
    },
}

impl FlyHashError {
    /// Create an InvalidConfig error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create an InputTooShort error.
    pub fn input_too_short(len: usize, n_grams: usize) -> Self {
        Self::InputTooShort { len, n_grams }
    }

    /// Create a LengthMismatch error.
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }
}

/// Result alias used across the fly hash crates.
pub type Result<T> = std::result::Result<T, FlyHashError>;
