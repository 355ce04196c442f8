//! 3-isogeny from the SWU curve onto the G2 twist

use bls381_params::bls12_381::hash_to_curve::{X_DEN, X_NUM, Y_DEN, Y_NUM};
use once_cell::sync::Lazy;

use super::swu::IsoPoint;
use crate::ec::bls12_381::curve::G2_CURVE;
use crate::ec::bls12_381::field::{Field, Fq2};
use crate::ec::bls12_381::jacobian::JacobianPoint;

/// Rational map coefficients, constant term first
struct IsogenyMap {
    x_num: Vec<Fq2>,
    x_den: Vec<Fq2>,
    y_num: Vec<Fq2>,
    y_den: Vec<Fq2>,
}

fn parse_coeffs(coeffs: &[(&str, &str)]) -> Vec<Fq2> {
    coeffs.iter().copied().map(Fq2::from_hex_pair).collect()
}

static ISO_3: Lazy<IsogenyMap> = Lazy::new(|| IsogenyMap {
    x_num: parse_coeffs(&X_NUM),
    x_den: parse_coeffs(&X_DEN),
    y_num: parse_coeffs(&Y_NUM),
    y_den: parse_coeffs(&Y_DEN),
});

/// Horner evaluation of a polynomial homogenised in `Z^2`
///
/// Returns `sum c_k x^k z^(2(d - k))` for the degree-`d` polynomial `coeffs`.
fn eval_homogeneous(coeffs: &[Fq2], x: &Fq2, z_pows: &[Fq2]) -> Fq2 {
    let mut terms = coeffs.iter().rev().zip(z_pows).map(|(c, zp)| c.mul(zp));
    let first = terms.next().unwrap_or_else(Fq2::zero);
    terms.fold(first, |acc, term| acc.mul(x).add(&term))
}

/// Evaluate a rational isogeny map on a Jacobian point
fn eval_iso(point: &IsoPoint, map: &IsogenyMap) -> JacobianPoint<Fq2> {
    let IsoPoint { x, y, z } = point;

    let max_ord = [&map.x_num, &map.x_den, &map.y_num, &map.y_den]
        .iter()
        .map(|c| c.len())
        .max()
        .unwrap_or(0);
    let z2 = z.square();
    let mut z_pows = Vec::with_capacity(max_ord);
    z_pows.push(Fq2::one());
    for i in 1..max_ord {
        let next = z_pows[i - 1].mul(&z2);
        z_pows.push(next);
    }

    let x_num = eval_homogeneous(&map.x_num, x, &z_pows);
    // X_DEN is one degree lower than X_NUM
    let x_den = eval_homogeneous(&map.x_den, x, &z_pows).mul(&z2);
    let y_num = eval_homogeneous(&map.y_num, x, &z_pows).mul(y);
    let y_den = eval_homogeneous(&map.y_den, x, &z_pows).mul(&z2.mul(z));

    let z_out = x_den.mul(&y_den);
    let x_out = x_num.mul(&y_den).mul(&z_out);
    let y_out = y_num.mul(&x_den).mul(&z_out.square());

    JacobianPoint::new(x_out, y_out, z_out, false, &G2_CURVE)
}

/// Map a point on the SWU curve onto the G2 twist
pub fn iso3(point: &IsoPoint) -> JacobianPoint<Fq2> {
    eval_iso(point, &ISO_3)
}
