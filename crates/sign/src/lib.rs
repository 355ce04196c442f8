//! BLS signature schemes over BLS12-381
//!
//! Public keys live in G1 (48 bytes compressed) and signatures in G2
//! (96 bytes compressed). Three schemes share one core:
//!
//! - [`BasicScheme`]: aggregation requires distinct messages
//! - [`AugScheme`]: every message is prefixed with the signer's public key
//! - [`PopScheme`]: proofs of possession allow fast same-message aggregation
//!
//! # Example
//!
//! ```
//! use bls381_sign::{key_gen, BasicScheme, SignatureScheme};
//!
//! let sk = key_gen(&[7u8; 32]).unwrap();
//! let pk = sk.get_g1();
//! let sig = BasicScheme::sign(&sk, b"hello").unwrap();
//! assert!(BasicScheme::verify(&pk, b"hello", &sig));
//! ```

#![forbid(unsafe_code)]

pub mod bls;
pub mod error;

pub use bls::{
    core_aggregate, core_aggregate_verify, core_sign, core_verify, key_gen, AugScheme,
    BasicScheme, PopScheme, PrivateKey, PublicKey, SignatureScheme, SignatureValue,
};
pub use error::{Error, Result};
