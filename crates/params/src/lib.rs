//! Constant values for the bls381 library
//!
//! Every large constant is kept as big-endian hex text without a `0x`
//! prefix. The algorithms crate parses them exactly once into field
//! elements; nothing in this crate performs arithmetic.

#![no_std]

pub mod bls12_381;
