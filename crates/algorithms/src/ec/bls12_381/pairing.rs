//! Optimal ate pairing on BLS12-381
//!
//! The Miller loop runs over affine points, with G2 points untwisted into
//! `E(Fq12)` for each line evaluation.

use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;
use tracing::{debug, instrument};

use super::affine::AffinePoint;
use super::curve::{EllipticCurveParams, G1_CURVE};
use super::field::{EmbedsInto, Field, Fq, Fq12, Fq2};
use super::jacobian::JacobianPoint;
use crate::error::{Error, Result};

/// `(Q^4 - Q^2 + 1) / N`, the hard part of the final exponent
static HARD_EXPONENT: Lazy<BigUint> = Lazy::new(|| {
    let q = &G1_CURVE.q;
    (q.pow(4) - q.pow(2) + 1u32) / &G1_CURVE.n
});

/// Evaluate `f(P) = P.y - slope * P.x - v` for a line `y = slope * x + v`
fn eval_line(p: &AffinePoint<Fq>, slope: &Fq12, v: &Fq12) -> Fq12 {
    p.y.sub_wide(&p.x.mul_wide(slope)).sub(v)
}

/// Vertical line `x = R.x` evaluated at `P`
fn vertical_line(r: &AffinePoint<Fq12>, p: &AffinePoint<Fq>) -> Fq12 {
    p.x.sub_wide(&r.x)
}

/// Tangent line at `R` evaluated at `P`
pub fn double_line_eval(r: &AffinePoint<Fq2>, p: &AffinePoint<Fq>) -> Fq12 {
    let r12 = r.untwist();
    let curve = r12.curve();
    let numerator = Fq12::from_u64(3).mul(&r12.x.square().add(&curve.a));
    let Some(slope) = numerator.div(&r12.y.double()) else {
        return vertical_line(&r12, p);
    };
    let v = r12.y.sub(&slope.mul(&r12.x));
    eval_line(p, &slope, &v)
}

/// Line through `R` and `Q` evaluated at `P`
///
/// When `R = -Q` the line is vertical and the result is `P.x - R.x`.
pub fn add_line_eval(r: &AffinePoint<Fq2>, q: &AffinePoint<Fq2>, p: &AffinePoint<Fq>) -> Fq12 {
    let r12 = r.untwist();
    let q12 = q.untwist();
    if r12 == q12.negate() {
        return vertical_line(&r12, p);
    }
    let Some(slope) = q12.y.sub(&r12.y).div(&q12.x.sub(&r12.x)) else {
        return vertical_line(&r12, p);
    };
    // r12.x != q12.x here, otherwise the slope division returned early
    let v = q12
        .y
        .mul(&r12.x)
        .sub(&r12.y.mul(&q12.x))
        .div(&r12.x.sub(&q12.x))
        .unwrap_or_else(Fq12::zero);
    eval_line(p, &slope, &v)
}

/// Miller loop over the bits of `t`, most significant bit skipped
///
/// Returns one when either input is the point at infinity.
pub fn miller_loop(t: &BigUint, p: &AffinePoint<Fq>, q: &AffinePoint<Fq2>) -> Fq12 {
    if p.infinity || q.infinity {
        return Fq12::one();
    }

    let mut r = q.clone();
    let mut f = Fq12::one();
    for i in (0..t.bits().saturating_sub(1)).rev() {
        let lrr = double_line_eval(&r, p);
        f = f.square().mul(&lrr);
        r = r.double();
        if t.bit(i) {
            let lrq = add_line_eval(&r, q, p);
            f = f.mul(&lrq);
            r = r.add(q);
        }
    }
    f
}

/// Raise a Miller loop output into the order-N subgroup of Fq12
#[instrument(level = "debug", skip_all)]
pub fn final_exponentiation(element: &Fq12, curve: &EllipticCurveParams<Fq>) -> Fq12 {
    if curve.k != 12 {
        let exp = (curve.q.pow(curve.k as u32) - BigUint::one()) / &curve.n;
        return element.pow(&exp);
    }

    let ans = element.pow(&HARD_EXPONENT);
    let ans = ans.qi_power(2).mul(&ans);
    // f^(Q^6) / f; the inverse exists for every non-zero Miller loop output
    ans.qi_power(6).div(&ans).unwrap_or_else(Fq12::zero)
}

/// `e(P, Q)` for `P` in G1 and `Q` in G2
#[instrument(level = "debug", skip_all)]
pub fn ate_pairing(p: &JacobianPoint<Fq>, q: &JacobianPoint<Fq2>) -> Fq12 {
    let t = G1_CURVE.ate_loop_count();
    let element = miller_loop(&t, &p.to_affine(), &q.to_affine());
    final_exponentiation(&element, &G1_CURVE)
}

/// `prod e(P_i, Q_i)` with a single final exponentiation
#[instrument(level = "debug", skip_all, fields(pairs = ps.len()))]
pub fn ate_pairing_multi(ps: &[JacobianPoint<Fq>], qs: &[JacobianPoint<Fq2>]) -> Result<Fq12> {
    if ps.len() != qs.len() {
        debug!(g1 = ps.len(), g2 = qs.len(), "pairing input length mismatch");
        return Err(Error::Length {
            context: "ate_pairing_multi",
            expected: ps.len(),
            actual: qs.len(),
        });
    }

    let t = G1_CURVE.ate_loop_count();
    let product = ps.iter().zip(qs).fold(Fq12::one(), |acc, (p, q)| {
        acc.mul(&miller_loop(&t, &p.to_affine(), &q.to_affine()))
    });
    Ok(final_exponentiation(&product, &G1_CURVE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_count_is_bls_parameter() {
        assert_eq!(
            G1_CURVE.ate_loop_count(),
            BigUint::from(0xd201_0000_0001_0000u64)
        );
    }

    #[test]
    fn test_miller_loop_with_infinity_is_one() {
        let t = G1_CURVE.ate_loop_count();
        let f = miller_loop(&t, &AffinePoint::infinity(), &AffinePoint::generator());
        assert_eq!(f, Fq12::one());
    }

    #[test]
    fn test_multi_pairing_length_mismatch() {
        let ps = vec![JacobianPoint::<Fq>::generator()];
        assert!(ate_pairing_multi(&ps, &[]).is_err());
    }
}
