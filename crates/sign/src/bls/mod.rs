//! BLS signatures with public keys in G1 and signatures in G2

mod operations;
mod keys;
mod schemes;


use bls381_algorithms::{G1Point, G2Point};
use num_bigint::BigUint;

pub use self::operations::{core_aggregate, core_aggregate_verify, core_sign, core_verify};
pub use self::keys::{key_gen, PrivateKey};
pub use self::schemes::{AugScheme, BasicScheme, PopScheme, SignatureScheme};

/// Public key: a point of G1
pub type PublicKey = G1Point;

/// Signature: a point of G2
pub type SignatureValue = G2Point;

fn group_order() -> &'static BigUint {
    bls381_algorithms::ec::bls12_381::group_order()
}
