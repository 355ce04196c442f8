//! Test support for the bls381 library
//!
//! Shared known-answer vectors and small helpers used by the integration
//! tests in `tests/`.

pub mod vectors;

use bls381_algorithms::{G1Point, G2Point};
use bls381_sign::PrivateKey;
use num_bigint::BigUint;

/// Decode a hex vector, panicking on malformed test data
pub fn unhex(data: &str) -> Vec<u8> {
    hex::decode(data).unwrap_or_else(|err| panic!("bad test vector {:?}: {}", data, err))
}

/// Decode a compressed G1 vector
pub fn g1_from_hex(data: &str) -> G1Point {
    G1Point::from_hex(data).unwrap_or_else(|err| panic!("bad G1 vector {:?}: {}", data, err))
}

/// Decode a compressed G2 vector
pub fn g2_from_hex(data: &str) -> G2Point {
    G2Point::from_hex(data).unwrap_or_else(|err| panic!("bad G2 vector {:?}: {}", data, err))
}

/// Private key from a 32-byte big-endian scalar derived from `bytes`, reduced mod N
pub fn private_key_from_wide(bytes: &[u8]) -> PrivateKey {
    let order = bls381_algorithms::ec::bls12_381::group_order();
    let reduced = (BigUint::from_bytes_be(bytes) % order).to_bytes_be();
    let mut padded = vec![0u8; PrivateKey::SIZE - reduced.len()];
    padded.extend_from_slice(&reduced);
    PrivateKey::from_bytes(&padded).unwrap_or_else(|err| panic!("reduced scalar rejected: {}", err))
}
