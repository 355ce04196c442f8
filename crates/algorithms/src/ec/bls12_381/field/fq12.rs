//! Quadratic extension `Fq12 = Fq6[w]/(w^2 - v)`, the pairing target field

use bls381_params::bls12_381::frobenius;
use once_cell::sync::Lazy;

use super::{Extension, Field, Fq2, Fq6, Tower};

/// Tower descriptor for Fq12
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fq12Tower;

/// Element `c0 + c1 w` of Fq12
pub type Fq12 = Extension<Fq12Tower, 2>;

static ROOT: Lazy<Fq6> = Lazy::new(|| Fq6::new([Fq2::zero(), Fq2::one(), Fq2::zero()]));

static FROBENIUS: Lazy<Vec<[Fq6; 1]>> = Lazy::new(|| {
    frobenius::FQ12
        .iter()
        .map(|row| row.map(|pair| Fq6::from_base(Fq2::from_hex_pair(pair))))
        .collect()
});

impl Tower<2> for Fq12Tower {
    type Base = Fq6;
    const DEGREE: usize = 12;
    const NAME: &'static str = "Fq12";

    fn root() -> &'static Fq6 {
        &ROOT
    }

    fn mul_by_root(value: &Fq6) -> Fq6 {
        value.mul_by_nonresidue()
    }

    fn invert(element: &Fq12) -> Option<Fq12> {
        let [a, b] = element.coeffs();
        let factor = a.square().sub(&b.square().mul_by_nonresidue()).invert()?;
        Some(Fq12::new([a.mul(&factor), b.neg().mul(&factor)]))
    }

    fn frobenius_coefficient(power: usize, index: usize) -> &'static Fq6 {
        &FROBENIUS[power - 1][index - 1]
    }
}

impl Fq12 {
    /// `w^2` embedded in Fq12, used to move twist points into Fq12
    pub fn w_squared() -> Self {
        Self::from_base(Fq12Tower::root().clone())
    }

    /// `w^3` embedded in Fq12
    pub fn w_cubed() -> Self {
        Self::new([Fq6::zero(), Fq12Tower::root().clone()])
    }
}
