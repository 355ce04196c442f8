//! HMAC-based Key Derivation Function (HKDF) with SHA-256
//!
//! This module implements HKDF as defined in RFC 5869.

use ::hkdf::Hkdf as HkdfCore;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::error::{validate, Error, Result};

/// Output size of SHA-256 in bytes
pub const HASH_SIZE: usize = 32;

/// Maximum HKDF-Expand output length for SHA-256
pub const MAX_OUTPUT_SIZE: usize = 255 * HASH_SIZE;

/// HKDF instantiated with SHA-256
#[derive(Clone, Copy, Debug, Default)]
pub struct Hkdf;

impl Hkdf {
    /// HKDF-Extract: `PRK = HMAC(salt, IKM)`
    ///
    /// A missing salt is treated as `HASH_SIZE` zero bytes.
    pub fn extract(salt: Option<&[u8]>, ikm: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let (prk, _) = HkdfCore::<Sha256>::extract(salt, ikm);
        Ok(Zeroizing::new(prk.to_vec()))
    }

    /// HKDF-Expand: derive `length` bytes from a pseudorandom key
    pub fn expand(prk: &[u8], info: Option<&[u8]>, length: usize) -> Result<Zeroizing<Vec<u8>>> {
        validate::max_length("HKDF-Expand output", length, MAX_OUTPUT_SIZE)?;
        let hk = HkdfCore::<Sha256>::from_prk(prk).map_err(|_| Error::Length {
            context: "PRK for HKDF-Expand",
            expected: HASH_SIZE,
            actual: prk.len(),
        })?;

        let mut okm = Zeroizing::new(vec![0u8; length]);
        hk.expand(info.unwrap_or_default(), &mut okm)
            .map_err(|_| Error::Processing {
                operation: "HKDF-Expand",
                details: "output length rejected",
            })?;
        Ok(okm)
    }

    /// Extract followed by expand
    pub fn derive(
        salt: Option<&[u8]>,
        ikm: &[u8],
        info: Option<&[u8]>,
        length: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let prk = Self::extract(salt, ikm)?;
        Self::expand(&prk, info, length)
    }
}

/// `HKDF-Expand(HKDF-Extract(salt, ikm), info, length)`
pub fn extract_expand(
    length: usize,
    ikm: &[u8],
    salt: &[u8],
    info: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    Hkdf::derive(Some(salt), ikm, Some(info), length)
}

#[cfg(test)]
mod tests;
