//! Curve parameter sets for G1, G2 and the base curve embedded in Fq12

use core::fmt;

use bls381_params::bls12_381 as params;
use num_bigint::{BigInt, BigUint};
use once_cell::sync::Lazy;

use super::field::{Field, Fq, Fq12, Fq2};
use super::field::EmbedsInto;

/// Short Weierstrass curve `y^2 = x^3 + a x + b` over the field `F`
pub struct EllipticCurveParams<F: Field> {
    /// Name used in diagnostics
    pub name: &'static str,
    /// Base field modulus
    pub q: BigUint,
    /// Prime subgroup order
    pub n: BigUint,
    /// Coefficient `a`
    pub a: F,
    /// Coefficient `b`
    pub b: F,
    /// Generator x-coordinate
    pub gx: F,
    /// Generator y-coordinate
    pub gy: F,
    /// Cofactor
    pub h: BigUint,
    /// Effective cofactor used for cofactor clearing
    pub h_eff: BigUint,
    /// Embedding degree
    pub k: usize,
    /// Curve parameter `x` (negative for BLS12-381)
    pub x: BigInt,
}

impl<F: Field> EllipticCurveParams<F> {
    /// Right-hand side `x^3 + a x + b` of the curve equation
    pub fn rhs(&self, x: &F) -> F {
        x.square().mul(x).add(&self.a.mul(x)).add(&self.b)
    }

    /// Miller loop parameter `T = |x|`
    pub fn ate_loop_count(&self) -> BigUint {
        self.x.magnitude().clone()
    }
}

impl<F: Field> fmt::Debug for EllipticCurveParams<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EllipticCurveParams")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Fields that carry a default curve
pub trait CurveField: Field {
    /// The curve points over this field live on by default
    fn curve() -> &'static EllipticCurveParams<Self>;
}

fn parse(hex: &str) -> BigUint {
    super::field::parse_hex_const(hex)
}

fn curve_x() -> BigInt {
    let x = BigInt::from(params::X_ABS);
    if params::X_IS_NEGATIVE {
        -x
    } else {
        x
    }
}

/// `E: y^2 = x^3 + 4` over Fq
pub static G1_CURVE: Lazy<EllipticCurveParams<Fq>> = Lazy::new(|| EllipticCurveParams {
    name: "G1",
    q: Fq::modulus().clone(),
    n: parse(params::N),
    a: Fq::from(params::A),
    b: Fq::from(params::B),
    gx: Fq::from_hex_const(params::G1_X),
    gy: Fq::from_hex_const(params::G1_Y),
    h: parse(params::H),
    h_eff: parse(params::H),
    k: params::EMBEDDING_DEGREE,
    x: curve_x(),
});

/// `E': y^2 = x^3 + 4(1 + i)` over Fq2
pub static G2_CURVE: Lazy<EllipticCurveParams<Fq2>> = Lazy::new(|| EllipticCurveParams {
    name: "G2",
    q: Fq::modulus().clone(),
    n: parse(params::N),
    a: Fq2::from_u64(params::A),
    b: Fq2::from_pair(Fq::from(params::B_TWIST.0), Fq::from(params::B_TWIST.1)),
    gx: Fq2::from_hex_pair(params::G2_X),
    gy: Fq2::from_hex_pair(params::G2_Y),
    h: parse(params::H_EFF),
    h_eff: parse(params::H_EFF),
    k: params::EMBEDDING_DEGREE,
    x: curve_x(),
});

/// The base curve `E` with coordinates embedded in Fq12, home of untwisted G2 points
pub static FQ12_CURVE: Lazy<EllipticCurveParams<Fq12>> = Lazy::new(|| EllipticCurveParams {
    name: "E(Fq12)",
    q: G1_CURVE.q.clone(),
    n: G1_CURVE.n.clone(),
    a: G1_CURVE.a.embed(),
    b: G1_CURVE.b.embed(),
    gx: G1_CURVE.gx.embed(),
    gy: G1_CURVE.gy.embed(),
    h: G1_CURVE.h.clone(),
    h_eff: G1_CURVE.h_eff.clone(),
    k: G1_CURVE.k,
    x: G1_CURVE.x.clone(),
});

impl CurveField for Fq {
    fn curve() -> &'static EllipticCurveParams<Fq> {
        &G1_CURVE
    }
}

impl CurveField for Fq2 {
    fn curve() -> &'static EllipticCurveParams<Fq2> {
        &G2_CURVE
    }
}

impl CurveField for Fq12 {
    fn curve() -> &'static EllipticCurveParams<Fq12> {
        &FQ12_CURVE
    }
}
