//! Traits implemented by the bls381 key, point and scheme types

pub mod serialize;
pub mod signature;

pub use serialize::{Serialize, SerializeSecret};
pub use signature::{AggregateSignature, Signature, SignatureDerive};
