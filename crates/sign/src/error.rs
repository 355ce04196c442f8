//! Error types for the signature crate

use bls381_algorithms::error::Error as AlgoError;
use thiserror::Error;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Seed shorter than key generation allows
    #[error("seed too short: need at least {min} bytes, got {actual}")]
    SeedTooShort {
        /// Minimum seed size
        min: usize,
        /// Supplied seed size
        actual: usize,
    },

    /// Invalid key size
    #[error("invalid key size: expected {expected}, got {actual}")]
    InvalidKeySize {
        /// Expected size in bytes
        expected: usize,
        /// Supplied size in bytes
        actual: usize,
    },

    /// Secret scalar outside `[0, N)`
    #[error("invalid private key: {0}")]
    InvalidKey(&'static str),

    /// Nothing to aggregate
    #[error("cannot aggregate an empty list of {0}")]
    EmptyAggregate(&'static str),

    /// Verification did not succeed
    #[error("{scheme} verification failed")]
    Verification {
        /// Scheme that rejected the input
        scheme: &'static str,
    },

    /// Failure inside the arithmetic layer
    #[error("arithmetic error: {0}")]
    Algorithm(#[from] AlgoError),
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for bls381_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::SeedTooShort { min, actual } => bls381_api::Error::InvalidLength {
                context: "BLS key generation seed",
                expected: min,
                actual,
            },
            Error::InvalidKeySize { expected, actual } => bls381_api::Error::InvalidLength {
                context: "BLS private key",
                expected,
                actual,
            },
            Error::InvalidKey(reason) => bls381_api::Error::InvalidKey {
                context: "BLS private key",
                message: reason.to_string(),
            },
            Error::EmptyAggregate(what) => bls381_api::Error::InvalidParameter {
                context: "BLS aggregate",
                message: format!("empty list of {}", what),
            },
            Error::Verification { scheme } => bls381_api::Error::InvalidSignature {
                context: scheme,
                message: "signature did not verify".to_string(),
            },
            Error::Algorithm(inner) => inner.into(),
        }
    }
}
