//! Key generation and private keys

use core::fmt;

use bls381_algorithms::ec::bls12_381::hash_to_curve::os2ip;
use bls381_algorithms::kdf::extract_expand;
use bls381_algorithms::{g1_generator, G1Point};
use bls381_api::{Result as ApiResult, SerializeSecret};
use bls381_params::bls12_381::schemes::{KEYGEN_MIN_SEED_SIZE, KEYGEN_OKM_LENGTH, KEYGEN_SALT};
use bls381_params::bls12_381::PRIVATE_KEY_SIZE;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use tracing::instrument;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::group_order;
use crate::error::{Error, Result};

/// Derive a private key from at least 32 bytes of seed material
///
/// `OS2IP(HKDF-SHA256(salt = "BLS-SIG-KEYGEN-SALT-", ikm = seed || 0x00,
/// info = I2OSP(48, 2), L = 48)) mod N`
#[instrument(level = "debug", skip_all)]
pub fn key_gen(seed: &[u8]) -> Result<PrivateKey> {
    if seed.len() < KEYGEN_MIN_SEED_SIZE {
        return Err(Error::SeedTooShort {
            min: KEYGEN_MIN_SEED_SIZE,
            actual: seed.len(),
        });
    }

    let mut ikm = Zeroizing::new(Vec::with_capacity(seed.len() + 1));
    ikm.extend_from_slice(seed);
    ikm.push(0);

    let info = (KEYGEN_OKM_LENGTH as u16).to_be_bytes();
    let okm = extract_expand(KEYGEN_OKM_LENGTH, &ikm, KEYGEN_SALT, &info)?;
    let scalar = os2ip(&okm) % group_order();
    Ok(PrivateKey::from_scalar(&scalar))
}

/// BLS private key: a scalar in `[0, N)` stored as 32 big-endian bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    bytes: [u8; PRIVATE_KEY_SIZE],
}

impl PrivateKey {
    /// Encoded size in bytes
    pub const SIZE: usize = PRIVATE_KEY_SIZE;

    /// Build a key from a scalar already reduced modulo N
    pub(crate) fn from_scalar(scalar: &BigUint) -> Self {
        let raw = Zeroizing::new(scalar.to_bytes_be());
        let mut bytes = [0u8; PRIVATE_KEY_SIZE];
        bytes[PRIVATE_KEY_SIZE - raw.len()..].copy_from_slice(&raw);
        Self { bytes }
    }

    /// Parse a 32-byte big-endian scalar, rejecting values `>= N`
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; PRIVATE_KEY_SIZE] =
            bytes.try_into().map_err(|_| Error::InvalidKeySize {
                expected: PRIVATE_KEY_SIZE,
                actual: bytes.len(),
            })?;
        if &BigUint::from_bytes_be(&bytes) >= group_order() {
            return Err(Error::InvalidKey("scalar is not below the group order"));
        }
        Ok(Self { bytes })
    }

    /// Key generation from fresh seed material
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        let mut seed = Zeroizing::new([0u8; KEYGEN_MIN_SEED_SIZE]);
        rng.fill_bytes(&mut seed[..]);
        key_gen(&seed[..])
    }

    /// The secret scalar
    ///
    /// The returned integer is not zeroized on drop.
    pub fn scalar(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }

    /// The public key `G1 * sk`
    pub fn get_g1(&self) -> G1Point {
        g1_generator().multiply(&self.scalar())
    }

    /// Sum of the keys modulo N
    pub fn aggregate(keys: &[PrivateKey]) -> Result<Self> {
        if keys.is_empty() {
            return Err(Error::EmptyAggregate("private keys"));
        }
        let sum = keys
            .iter()
            .fold(BigUint::default(), |acc, key| (acc + key.scalar()) % group_order());
        Ok(Self::from_scalar(&sum))
    }

    /// Big-endian encoding, zeroized on drop
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.to_vec())
    }
}

impl ConstantTimeEq for PrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.ct_eq(&other.bytes)
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

impl SerializeSecret for PrivateKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        PrivateKey::from_bytes(bytes).map_err(Into::into)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.to_bytes()
    }
}
