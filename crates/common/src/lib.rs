//! Common implementations and shared functionality for the bls381 library
//!
//! This crate provides the modular arithmetic layer every field element
//! is built on: reduction of signed values, inversion, exponentiation and
//! modular square roots over arbitrary-precision integers.

pub mod math_common;

pub use math_common::{
    is_quadratic_residue, mod_add, mod_exp, mod_inv, mod_mul, mod_neg, mod_sqrt, mod_sub, modulo,
};
