//! Cubic extension `Fq6 = Fq2[v]/(v^3 - (1 + i))`

use bls381_params::bls12_381::frobenius;
use once_cell::sync::Lazy;

use super::{Extension, Field, Fq, Fq2, Tower};

/// Tower descriptor for Fq6
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fq6Tower;

/// Element `c0 + c1 v + c2 v^2` of Fq6
pub type Fq6 = Extension<Fq6Tower, 3>;

static ROOT: Lazy<Fq2> = Lazy::new(|| Fq2::from_pair(Fq::one(), Fq::one()));

static FROBENIUS: Lazy<Vec<[Fq2; 2]>> = Lazy::new(|| {
    frobenius::FQ6
        .iter()
        .map(|row| row.map(Fq2::from_hex_pair))
        .collect()
});

impl Tower<3> for Fq6Tower {
    type Base = Fq2;
    const DEGREE: usize = 6;
    const NAME: &'static str = "Fq6";

    fn root() -> &'static Fq2 {
        &ROOT
    }

    fn mul_by_root(value: &Fq2) -> Fq2 {
        value.mul_by_nonresidue()
    }

    fn invert(element: &Fq6) -> Option<Fq6> {
        let [a, b, c] = element.coeffs();

        let g0 = a.square().sub(&b.mul(&c.mul_by_nonresidue()));
        let g1 = c.square().mul_by_nonresidue().sub(&a.mul(b));
        let g2 = b.square().sub(&a.mul(c));

        let norm = g0
            .mul(a)
            .add(&g1.mul(c).add(&g2.mul(b)).mul_by_nonresidue());
        let factor = norm.invert()?;

        Some(Fq6::new([g0.mul(&factor), g1.mul(&factor), g2.mul(&factor)]))
    }

    fn frobenius_coefficient(power: usize, index: usize) -> &'static Fq2 {
        &FROBENIUS[power - 1][index - 1]
    }
}

impl Fq6 {
    /// Multiply by the Fq12 non-residue `v`: `(a, b, c) -> (c (1 + i), a, b)`
    pub fn mul_by_nonresidue(&self) -> Self {
        let [a, b, c] = self.coeffs();
        Self::new([c.mul_by_nonresidue(), a.clone(), b.clone()])
    }
}
