//! Public API traits and types for the bls381 library
//!
//! This crate provides the public API surface shared by the bls381 crates:
//! the error type and the serialization and signature traits.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{AggregateSignature, Serialize, SerializeSecret, Signature, SignatureDerive};

// Re-export trait modules for direct access
pub use traits::{serialize, signature};
