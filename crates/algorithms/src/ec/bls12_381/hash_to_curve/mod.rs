//! Hashing to G2 (RFC 9380 suite `BLS12381G2_XMD:SHA-256_SSWU_RO_`)
//!
//! `message -> hash_to_field -> (osswu2_help, iso3) x 2 -> add -> clear cofactor`

mod expand;
mod hash_to_field;
mod isogeny;
mod swu;

pub use expand::{expand_message_xmd, i2osp, os2ip, MAX_DST_LENGTH, MAX_XMD_BLOCKS};
pub use hash_to_field::{hash_to_field, hash_to_fq2};
pub use isogeny::iso3;
pub use swu::{osswu2_help, IsoPoint};

use tracing::instrument;

use super::curve::G2_CURVE;
use super::field::Fq2;
use super::jacobian::JacobianPoint;
use crate::error::{Error, Result};

/// Map one or two field elements to G2, clearing the cofactor
pub fn opt_swu2_map(t: &Fq2, t2: Option<&Fq2>) -> Result<JacobianPoint<Fq2>> {
    let mut point = iso3(&osswu2_help(t)?);
    if let Some(t2) = t2 {
        point = point.add(&iso3(&osswu2_help(t2)?));
    }
    Ok(point.multiply(&G2_CURVE.h_eff))
}

/// Hash `message` to a point of G2 under the domain separation tag `dst`
#[instrument(level = "debug", skip_all, fields(msg_len = message.len()))]
pub fn g2_map(message: &[u8], dst: &[u8]) -> Result<JacobianPoint<Fq2>> {
    let elements = hash_to_fq2(message, 2, dst)?;
    let [t1, t2] = elements.as_slice() else {
        return Err(Error::Other("hash_to_field returned the wrong element count"));
    };
    opt_swu2_map(t1, Some(t2))
}

/// Alias of [`g2_map`]
pub fn hash_to_g2(message: &[u8], dst: &[u8]) -> Result<JacobianPoint<Fq2>> {
    g2_map(message, dst)
}
