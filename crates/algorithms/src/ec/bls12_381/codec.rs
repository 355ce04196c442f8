//! Compressed point encoding
//!
//! The three most significant bits of the first byte are flags:
//! `0x80` compression (always set), `0x40` infinity, `0x20` sign of y.
//! The remaining bits hold the big-endian x-coordinate.

use tracing::debug;

use super::curve::EllipticCurveParams;
use super::field::{Field, SquareRoot};
use super::jacobian::JacobianPoint;
use crate::error::{validate, Error, Result};

const COMPRESSION_FLAG: u8 = 0x80;
const INFINITY_FLAG: u8 = 0x40;
const SIGN_FLAG: u8 = 0x20;
const FLAG_MASK: u8 = 0xe0;

/// Encode a point in compressed form (48 bytes for G1, 96 for G2)
pub fn encode<F: Field>(point: &JacobianPoint<F>) -> Vec<u8> {
    if point.is_infinity() {
        let mut out = vec![0u8; F::SIZE];
        out[0] = COMPRESSION_FLAG | INFINITY_FLAG;
        return out;
    }

    let affine = point.to_affine();
    let mut out = affine.x.to_bytes();
    out[0] |= COMPRESSION_FLAG;
    if affine.y.sign_flag() {
        out[0] |= SIGN_FLAG;
    }
    out
}

/// Decode a compressed point onto `curve`
///
/// Subgroup membership is not checked here; see [`JacobianPoint::is_valid`].
pub fn decode<F: SquareRoot>(
    bytes: &[u8],
    curve: &'static EllipticCurveParams<F>,
) -> Result<JacobianPoint<F>> {
    validate::length(curve.name, bytes.len(), F::SIZE)?;

    let flags = bytes[0] & FLAG_MASK;
    if matches!(flags, 0x20 | 0x60 | 0xe0) {
        debug!(curve = curve.name, flags, "rejecting invalid flag combination");
        return Err(Error::encoding(curve.name, "invalid flag combination"));
    }
    if flags & COMPRESSION_FLAG == 0 {
        return Err(Error::encoding(curve.name, "uncompressed encodings are not supported"));
    }

    if flags & INFINITY_FLAG != 0 {
        let payload_is_zero = bytes[0] & !FLAG_MASK == 0 && bytes[1..].iter().all(|&b| b == 0);
        if !payload_is_zero {
            debug!(curve = curve.name, "rejecting non-canonical infinity");
            return Err(Error::encoding(
                curve.name,
                "infinity flag with non-zero payload",
            ));
        }
        return Ok(JacobianPoint::infinity_on(curve));
    }

    let mut x_bytes = bytes.to_vec();
    x_bytes[0] &= !FLAG_MASK;
    let x = F::from_bytes(&x_bytes)?;

    let mut y = y_for_x(&x, curve)?;
    let sign = flags & SIGN_FLAG != 0;
    if y.sign_flag() != sign {
        y = y.neg();
    }

    Ok(JacobianPoint::new(x, y, F::one(), false, curve))
}

/// Solve `y^2 = x^3 + a x + b` for `y`
pub fn y_for_x<F: SquareRoot>(x: &F, curve: &EllipticCurveParams<F>) -> Result<F> {
    let rhs = curve.rhs(x);
    let y = rhs
        .sqrt()
        .map_err(|_| Error::encoding(curve.name, "x-coordinate is not on the curve"))?;
    if y.square() != rhs {
        return Err(Error::encoding(curve.name, "x-coordinate is not on the curve"));
    }
    Ok(y)
}
