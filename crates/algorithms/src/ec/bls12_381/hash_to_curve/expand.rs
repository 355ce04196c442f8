//! Integer/octet-string conversions and `expand_message_xmd` (RFC 9380, section 5.3)

use digest::core_api::BlockSizeUser;
use digest::Digest;
use num_bigint::BigUint;

use crate::error::{validate, Error, Result};

/// Largest number of hash blocks `expand_message_xmd` may produce
pub const MAX_XMD_BLOCKS: usize = 255;

/// Largest domain separation tag accepted without hashing it down
pub const MAX_DST_LENGTH: usize = 255;

/// Big-endian encoding of `value` in exactly `length` bytes
///
/// Fails when `value >= 256^length`.
pub fn i2osp(value: &BigUint, length: usize) -> Result<Vec<u8>> {
    let digits = value.to_bytes_be();
    let significant = if value.bits() == 0 { 0 } else { digits.len() };
    if significant > length {
        return Err(Error::param(
            "i2osp",
            format!("value does not fit in {} bytes", length),
        ));
    }
    let mut out = vec![0u8; length];
    out[length - significant..].copy_from_slice(&digits[digits.len() - significant..]);
    Ok(out)
}

/// Big-endian octet string to integer
pub fn os2ip(octets: &[u8]) -> BigUint {
    BigUint::from_bytes_be(octets)
}

fn i2osp_small(value: usize, length: usize) -> Result<Vec<u8>> {
    i2osp(&BigUint::from(value), length)
}

fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}

/// Expand `message` into `length` uniformly random bytes with the hash `D`
pub fn expand_message_xmd<D>(message: &[u8], dst: &[u8], length: usize) -> Result<Vec<u8>>
where
    D: Digest + BlockSizeUser,
{
    let output_size = <D as Digest>::output_size();
    let ell = length.div_ceil(output_size);
    validate::max_length("expand_message_xmd blocks", ell, MAX_XMD_BLOCKS)?;
    validate::max_length("expand_message_xmd dst", dst.len(), MAX_DST_LENGTH)?;

    let mut dst_prime = dst.to_vec();
    dst_prime.extend(i2osp_small(dst.len(), 1)?);
    let z_pad = vec![0u8; D::block_size()];
    let l_i_b_str = i2osp_small(length, 2)?;

    let b_0 = D::new()
        .chain_update(&z_pad)
        .chain_update(message)
        .chain_update(&l_i_b_str)
        .chain_update([0u8])
        .chain_update(&dst_prime)
        .finalize()
        .to_vec();

    let mut uniform = Vec::with_capacity(ell * output_size);
    let mut b_i = D::new()
        .chain_update(&b_0)
        .chain_update([1u8])
        .chain_update(&dst_prime)
        .finalize()
        .to_vec();
    uniform.extend_from_slice(&b_i);

    for i in 2..=ell {
        b_i = D::new()
            .chain_update(xor(&b_0, &b_i))
            .chain_update(i2osp_small(i, 1)?)
            .chain_update(&dst_prime)
            .finalize()
            .to_vec();
        uniform.extend_from_slice(&b_i);
    }

    uniform.truncate(length);
    Ok(uniform)
}
