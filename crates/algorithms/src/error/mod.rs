//! Error handling for the BLS12-381 primitives

use std::borrow::Cow;
use std::fmt;

use bls381_api::Error as CoreError;

/// The error type for the BLS12-381 primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Malformed byte or text encoding
    Encoding {
        /// What was being decoded
        context: &'static str,
        /// What was wrong with it
        details: Cow<'static, str>,
    },

    /// Square root requested for a quadratic non-residue
    NoSquareRoot,

    /// Processing error during an arithmetic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create an Encoding error
    pub fn encoding<D: Into<Cow<'static, str>>>(context: &'static str, details: D) -> Self {
        Error::Encoding {
            context,
            details: details.into(),
        }
    }
}

/// Result type for the BLS12-381 primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Encoding { context, details } => {
                write!(f, "Invalid encoding of {}: {}", context, details)
            }
            Error::NoSquareRoot => write!(f, "No sqrt exists"),
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: "bls12-381",
                message: format!("{}: {}", name, reason),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Encoding { context, details } => CoreError::SerializationError {
                context,
                message: details.into_owned(),
            },
            Error::NoSquareRoot => CoreError::SerializationError {
                context: "point decoding",
                message: "no square root exists".to_string(),
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details.to_string(),
            },
            Error::Other(msg) => CoreError::Other {
                context: "bls12-381",
                message: msg.to_string(),
            },
        }
    }
}

pub mod validate;
