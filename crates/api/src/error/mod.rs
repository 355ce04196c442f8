//! Error handling for the bls381 library

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

impl From<std::array::TryFromSliceError> for Error {
    fn from(_: std::array::TryFromSliceError) -> Self {
        Self::InvalidLength {
            context: "array conversion",
            expected: 0,
            actual: 0,
        }
    }
}

impl std::error::Error for Error {}

// Specialized result types for different operations
/// Result of key parsing and generation
pub type KeyResult<T> = Result<T>;
/// Result of signing and verification
pub type SignatureResult<T> = Result<T>;
