//! Constants for the BLS12-381 pairing-friendly curve
//!
//! Base curve `E: y^2 = x^3 + 4` over Fq, and its sextic twist
//! `E': y^2 = x^3 + 4(1 + i)` over Fq2.

pub mod frobenius;
pub mod hash_to_curve;
pub mod schemes;

/// Size of a serialized base field element in bytes
pub const FQ_SIZE: usize = 48;

/// Size of a compressed G1 point in bytes
pub const G1_COMPRESSED_SIZE: usize = FQ_SIZE;

/// Size of a compressed G2 point in bytes
pub const G2_COMPRESSED_SIZE: usize = 2 * FQ_SIZE;

/// Size of a serialized private key in bytes
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Embedding degree of the curve
pub const EMBEDDING_DEGREE: usize = 12;

/// Base field modulus Q
pub const Q: &str = "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab";

/// Prime order N of G1, G2 and GT
pub const N: &str = "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001";

/// Cofactor of G1
pub const H: &str = "396c8c005555e1568c00aaab0000aaab";

/// Effective cofactor used to clear the cofactor of hashed G2 points
pub const H_EFF: &str = "bc69f08f2ee75b3584c6a0ea91b352888e2a8e9145ad7689986ff031508ffe1329c2f178731db956d82bf015d1212b02ec0ec69d7477c1ae954cbc06689f6a359894c0adebbf6b4e8020005aaa95551";

/// Absolute value of the curve parameter x
pub const X_ABS: u64 = 0xd201_0000_0001_0000;

/// The curve parameter x is negative
pub const X_IS_NEGATIVE: bool = true;

/// Weierstrass coefficient `a` of the base curve
pub const A: u64 = 0;

/// Weierstrass coefficient `b` of the base curve
pub const B: u64 = 4;

/// Coefficients `(c0, c1)` of `b' = 4(1 + i)` on the twist
pub const B_TWIST: (u64, u64) = (4, 4);

/// G1 generator x-coordinate
pub const G1_X: &str = "17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb";

/// G1 generator y-coordinate
pub const G1_Y: &str = "08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1";

/// G2 generator x-coordinate as `(c0, c1)`
pub const G2_X: (&str, &str) = (
    "024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8",
    "13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e",
);

/// G2 generator y-coordinate as `(c0, c1)`
pub const G2_Y: (&str, &str) = (
    "0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801",
    "0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be",
);
