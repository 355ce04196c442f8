//! Quadratic extension `Fq2 = Fq[i]/(i^2 + 1)`

use bls381_params::bls12_381::frobenius;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

use super::{Extension, Field, Fq, SquareRoot, Tower};
use crate::error::{Error, Result};

/// Tower descriptor for Fq2
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fq2Tower;

/// Element `c0 + c1 i` of Fq2
pub type Fq2 = Extension<Fq2Tower, 2>;

static ROOT: Lazy<Fq> = Lazy::new(|| Fq::from_i64(-1));

static FROBENIUS: Lazy<Vec<[Fq; 1]>> = Lazy::new(|| {
    frobenius::FQ2
        .iter()
        .map(|row| row.map(Fq::from_hex_const))
        .collect()
});

/// (Q - 1) / 2
static EULER_EXP: Lazy<BigUint> = Lazy::new(|| (Fq::modulus() - 1u32) >> 1u32);

impl Tower<2> for Fq2Tower {
    type Base = Fq;
    const DEGREE: usize = 2;
    const NAME: &'static str = "Fq2";

    fn root() -> &'static Fq {
        &ROOT
    }

    fn mul_by_root(value: &Fq) -> Fq {
        value.neg()
    }

    fn invert(element: &Fq2) -> Option<Fq2> {
        let [a, b] = element.coeffs();
        let factor = a.square().add(&b.square()).invert()?;
        Some(Fq2::new([a.mul(&factor), b.neg().mul(&factor)]))
    }

    fn frobenius_coefficient(power: usize, index: usize) -> &'static Fq {
        &FROBENIUS[power - 1][index - 1]
    }
}

impl Fq2 {
    /// Build `c0 + c1 i` from two base field elements
    pub fn from_pair(c0: Fq, c1: Fq) -> Self {
        Self::new([c0, c1])
    }

    pub(crate) fn from_hex_pair((c0, c1): (&str, &str)) -> Self {
        Self::new([Fq::from_hex_const(c0), Fq::from_hex_const(c1)])
    }

    /// Real part
    pub fn c0(&self) -> &Fq {
        self.coeff(0)
    }

    /// Imaginary part
    pub fn c1(&self) -> &Fq {
        self.coeff(1)
    }

    /// Multiply by the Fq6 non-residue `1 + i`: `(a, b) -> (a - b, a + b)`
    pub fn mul_by_nonresidue(&self) -> Self {
        let (a, b) = (self.c0(), self.c1());
        Self::new([a.sub(b), a.add(b)])
    }

    /// Complex conjugate, equal to the first Frobenius power
    pub fn conjugate(&self) -> Self {
        Self::new([self.c0().clone(), self.c1().neg()])
    }

    /// Sign of the element as defined for hash-to-curve (`sgn0`)
    pub fn sgn0(&self) -> bool {
        let sign_0 = self.c0().is_odd();
        let zero_0 = self.c0().is_zero();
        let sign_1 = self.c1().is_odd();
        sign_0 || (zero_0 && sign_1)
    }
}

impl SquareRoot for Fq2 {
    fn sqrt(&self) -> Result<Self> {
        let (a0, a1) = (self.c0(), self.c1());

        if a1.is_zero() {
            // A purely real value has a root in Fq or in i*Fq
            return if a0.is_square() {
                Ok(Self::from_pair(a0.sqrt()?, Fq::zero()))
            } else {
                Ok(Self::from_pair(Fq::zero(), a0.neg().sqrt()?))
            };
        }

        let minus_one = Fq::from_i64(-1);
        let alpha = a0.square().add(&a1.square());
        if alpha.pow(&EULER_EXP) == minus_one {
            return Err(Error::NoSquareRoot);
        }

        let alpha = alpha.sqrt()?;
        let half = Fq::from(2).invert().ok_or(Error::NoSquareRoot)?;
        let mut delta = a0.add(&alpha).mul(&half);
        if delta.pow(&EULER_EXP) == minus_one {
            delta = a0.sub(&alpha).mul(&half);
        }

        let x0 = delta.sqrt()?;
        let x1 = x0
            .double()
            .invert()
            .map(|inv| a1.mul(&inv))
            .ok_or(Error::NoSquareRoot)?;
        Ok(Self::from_pair(x0, x1))
    }
}
