//! Arithmetic engine for BLS12-381
//!
//! This crate provides the field tower, curve point arithmetic, the optimal
//! ate pairing, hashing to G2 and compressed point encoding, together with the
//! HKDF used by key generation.
//!
//! # Security
//!
//! The arithmetic is built on arbitrary-precision integers and is **not**
//! constant-time. Scalar multiplication is double-and-add over the scalar bits
//! and field inversion is the extended Euclidean algorithm.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve primitives
pub mod ec;
pub use ec::bls12_381::{
    g1_generator, g2_generator, AffinePoint, Field, Fq, Fq12, Fq2, Fq6, G1Point, G2Point, Gt,
    JacobianPoint,
};

// KDF implementations
pub mod kdf;
pub use kdf::Hkdf;
