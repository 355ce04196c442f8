//! Elliptic curve primitives
//!
//! This module provides the BLS12-381 pairing-friendly curve: its field
//! tower, the G1 and G2 groups, the optimal ate pairing and hashing to G2.

pub mod bls12_381;

pub use bls12_381::{
    ate_pairing as bls12_381_pairing, ate_pairing_multi as bls12_381_multi_pairing,
    G1Point as Bls12_381G1, G2Point as Bls12_381G2, Gt as Bls12_381Gt,
};
