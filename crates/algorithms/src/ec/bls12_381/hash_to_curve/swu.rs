//! Simplified SWU map onto the 3-isogenous curve `E2': y^2 = x^3 + a' x + b'`

use bls381_params::bls12_381::hash_to_curve::{ETAS, ISO_A, ISO_B, ROOTS_OF_UNITY, XI_2};
use num_bigint::BigUint;
use once_cell::sync::Lazy;

use crate::ec::bls12_381::field::{Field, Fq, Fq2};
use crate::error::{Error, Result};

static XI: Lazy<Fq2> = Lazy::new(|| Fq2::from_pair(Fq::from_i64(XI_2.0), Fq::from_i64(XI_2.1)));

/// Coefficient `a'` of the isogenous curve
pub(crate) static ISO_CURVE_A: Lazy<Fq2> =
    Lazy::new(|| Fq2::from_pair(Fq::from(ISO_A.0), Fq::from(ISO_A.1)));

/// Coefficient `b'` of the isogenous curve
pub(crate) static ISO_CURVE_B: Lazy<Fq2> =
    Lazy::new(|| Fq2::from_pair(Fq::from(ISO_B.0), Fq::from(ISO_B.1)));

static ROOTS: Lazy<Vec<Fq2>> =
    Lazy::new(|| ROOTS_OF_UNITY.iter().copied().map(Fq2::from_hex_pair).collect());

static ETA_VALUES: Lazy<Vec<Fq2>> = Lazy::new(|| ETAS.iter().copied().map(Fq2::from_hex_pair).collect());

/// `(Q^2 - 9) / 16`
static SQRT_EXP: Lazy<BigUint> = Lazy::new(|| {
    let q = Fq::modulus();
    (q * q - 9u32) >> 4u32
});

/// Jacobian point on the isogenous curve, input to [`super::isogeny::iso3`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IsoPoint {
    /// X coordinate
    pub x: Fq2,
    /// Y coordinate
    pub y: Fq2,
    /// Z coordinate
    pub z: Fq2,
}

impl IsoPoint {
    /// Whether `Y^2 = X^3 + a' X Z^4 + b' Z^6`
    pub fn is_on_curve(&self) -> bool {
        let z2 = self.z.square();
        let z4 = z2.square();
        let z6 = z4.mul(&z2);
        let rhs = self
            .x
            .square()
            .mul(&self.x)
            .add(&ISO_CURVE_A.mul(&self.x).mul(&z4))
            .add(&ISO_CURVE_B.mul(&z6));
        self.y.square() == rhs
    }
}

fn pick_root(candidate: &Fq2, multipliers: &[Fq2], num: &Fq2, den: &Fq2, t: &Fq2) -> Option<Fq2> {
    multipliers.iter().find_map(|m| {
        let y = candidate.mul(m);
        if y.square().mul(den) != *num {
            return None;
        }
        Some(if y.sgn0() != t.sgn0() { y.neg() } else { y })
    })
}

/// Map one field element onto the isogenous curve
///
/// The returned point satisfies `sgn0(y) == sgn0(t)`.
pub fn osswu2_help(t: &Fq2) -> Result<IsoPoint> {
    let xi = &*XI;
    let (a, b) = (&*ISO_CURVE_A, &*ISO_CURVE_B);

    let t2 = t.square();
    let num_den_common = xi.square().mul(&t2.square()).add(&xi.mul(&t2));
    let x0_num = b.mul(&num_den_common.add(&Fq2::one()));
    let mut x0_den = a.neg().mul(&num_den_common);
    if x0_den.is_zero() {
        x0_den = a.mul(xi);
    }

    let x0_den2 = x0_den.square();
    let gx0_den = x0_den2.mul(&x0_den);
    let gx0_num = b
        .mul(&gx0_den)
        .add(&a.mul(&x0_num).mul(&x0_den2))
        .add(&x0_num.square().mul(&x0_num));

    // sqrt(gx0_num / gx0_den) candidate without an inversion
    let mut tmp1 = gx0_den.square().square().mul(&gx0_den.square()).mul(&gx0_den);
    let tmp2 = gx0_num.mul(&tmp1);
    tmp1 = tmp1.mul(&tmp2).mul(&gx0_den);
    let sqrt_candidate = tmp2.mul(&tmp1.pow(&SQRT_EXP));

    if let Some(y0) = pick_root(&sqrt_candidate, &ROOTS, &gx0_num, &gx0_den, t) {
        return Ok(IsoPoint {
            x: x0_num.mul(&x0_den),
            y: y0.mul(&gx0_den),
            z: x0_den,
        });
    }

    // g(x0) is not square, so g(x1) with x1 = xi t^2 x0 is
    let x1_num = xi.mul(&t2).mul(&x0_num);
    let gx1_num = xi.square().mul(xi).mul(&t2.square().mul(&t2)).mul(&gx0_num);
    let sqrt_candidate = sqrt_candidate.mul(&t2.mul(t));

    if let Some(y1) = pick_root(&sqrt_candidate, &ETA_VALUES, &gx1_num, &gx0_den, t) {
        return Ok(IsoPoint {
            x: x1_num.mul(&x0_den),
            y: y1.mul(&gx0_den),
            z: x0_den,
        });
    }

    Err(Error::Processing {
        operation: "osswu2_help",
        details: "no square root candidate matched",
    })
}
