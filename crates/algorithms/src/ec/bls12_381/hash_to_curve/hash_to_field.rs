//! `hash_to_field` (RFC 9380, section 5.2)

use bls381_params::bls12_381::hash_to_curve::HASH_TO_FIELD_LENGTH;
use digest::core_api::BlockSizeUser;
use digest::Digest;
use num_bigint::BigUint;
use sha2::Sha256;

use super::expand::{expand_message_xmd, os2ip};
use crate::ec::bls12_381::field::{Fq, Fq2};
use crate::error::{Error, Result};

/// Hash `message` into `count` field elements of extension `degree`
///
/// Each element coefficient is `OS2IP(tv) mod modulus` over `byte_length`
/// bytes of expanded output.
pub fn hash_to_field<D>(
    message: &[u8],
    count: usize,
    dst: &[u8],
    modulus: &BigUint,
    degree: usize,
    byte_length: usize,
) -> Result<Vec<Vec<BigUint>>>
where
    D: Digest + BlockSizeUser,
{
    let length_in_bytes = count * degree * byte_length;
    let uniform = expand_message_xmd::<D>(message, dst, length_in_bytes)?;

    let elements = uniform
        .chunks(byte_length * degree)
        .take(count)
        .map(|element| {
            element
                .chunks(byte_length)
                .map(|tv| os2ip(tv) % modulus)
                .collect()
        })
        .collect();
    Ok(elements)
}

/// Hash into `count` elements of Fq2 with SHA-256
pub fn hash_to_fq2(message: &[u8], count: usize, dst: &[u8]) -> Result<Vec<Fq2>> {
    let elements = hash_to_field::<Sha256>(
        message,
        count,
        dst,
        Fq::modulus(),
        2,
        HASH_TO_FIELD_LENGTH,
    )?;
    elements
        .into_iter()
        .map(|coeffs| match coeffs.as_slice() {
            [c0, c1] => Ok(Fq2::from_pair(Fq::new(c0.clone()), Fq::new(c1.clone()))),
            _ => Err(Error::Length {
                context: "hash_to_fq2 coefficients",
                expected: 2,
                actual: coeffs.len(),
            }),
        })
        .collect()
}
