//! # bls381
//!
//! BLS signatures over the BLS12-381 pairing-friendly curve.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bls381 = "0.1"
//! ```
//!
//! ## Features
//!
//! - `sign` (default): the basic, augmented and proof-of-possession schemes
//! - `algorithms`: field tower, curve arithmetic, pairing and hash-to-curve
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`bls381-api`]: Error type and public traits
//! - [`bls381-common`]: Modular arithmetic helpers
//! - [`bls381-params`]: Curve and scheme constants
//! - [`bls381-algorithms`]: BLS12-381 arithmetic engine
//! - [`bls381-sign`]: BLS signature schemes

// Core re-exports (always available)
pub use bls381_api as api;
pub use bls381_common as common;
pub use bls381_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use bls381_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use bls381_sign as sign;

/// Common imports for bls381 users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{AggregateSignature, Serialize, SerializeSecret, Signature, SignatureDerive};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{Field, G1Point, G2Point, Gt};

    #[cfg(feature = "sign")]
    pub use crate::sign::{
        key_gen, AugScheme, BasicScheme, PopScheme, PrivateKey, PublicKey, SignatureScheme,
        SignatureValue,
    };
}
