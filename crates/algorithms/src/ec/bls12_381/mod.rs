//! BLS12-381 pairing-friendly elliptic curve
//!
//! Field tower, G1/G2 point arithmetic, the optimal ate pairing, hashing to
//! G2 and compressed point encoding.
//!
//! **Warning:** arithmetic is variable-time. Scalar multiplication and
//! inversion branch on their inputs.

mod affine;
mod codec;
mod curve;
pub mod field;
pub mod hash_to_curve;
mod jacobian;
pub mod pairing;

#[cfg(test)]
mod tests;

use num_bigint::BigUint;

pub use affine::AffinePoint;
pub use codec::{decode, encode, y_for_x};
pub use curve::{CurveField, EllipticCurveParams, FQ12_CURVE, G1_CURVE, G2_CURVE};
pub use field::{EmbedsInto, Extension, Field, Fq, Fq12, Fq2, Fq6, SquareRoot, Tower};
pub use hash_to_curve::{g2_map, hash_to_g2};
pub use jacobian::JacobianPoint;
pub use pairing::{ate_pairing, ate_pairing_multi, final_exponentiation, miller_loop};

/// Point of G1 in Jacobian coordinates
pub type G1Point = JacobianPoint<Fq>;

/// Point of G2 in Jacobian coordinates
pub type G2Point = JacobianPoint<Fq2>;

/// Element of the pairing target group
pub type Gt = Fq12;

/// Generator of G1
pub fn g1_generator() -> G1Point {
    G1Point::generator()
}

/// Generator of G2
pub fn g2_generator() -> G2Point {
    G2Point::generator()
}

/// `P * scalar` in G1
pub fn scalar_multiply_g1(point: &G1Point, scalar: &BigUint) -> G1Point {
    point.multiply(scalar)
}

/// `P * scalar` in G2
pub fn scalar_multiply_g2(point: &G2Point, scalar: &BigUint) -> G2Point {
    point.multiply(scalar)
}

/// Order of G1, G2 and GT
pub fn group_order() -> &'static BigUint {
    &G1_CURVE.n
}
