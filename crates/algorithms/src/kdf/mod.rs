//! Key derivation functions
//!
//! Only HKDF-SHA256 is provided; it backs BLS key generation.
//!
//! ## Example usage
//!
//! ```
//! use bls381_algorithms::kdf::Hkdf;
//!
//! let okm = Hkdf::derive(Some(b"salt"), b"input keying material", Some(b"info"), 48).unwrap();
//! assert_eq!(okm.len(), 48);
//! ```

pub mod hkdf;

pub use self::hkdf::{extract_expand, Hkdf};
