//! Field tower for BLS12-381
//!
//! `Fq` is the prime field. `Fq2 = Fq[i]/(i^2 + 1)`, `Fq6 = Fq2[v]/(v^3 - (1 + i))`
//! and `Fq12 = Fq6[w]/(w^2 - v)` are built from one generic [`Extension`]
//! type, parameterised by a [`Tower`] descriptor that supplies the base
//! field, the non-residue used to fold overflow terms, the closed-form
//! inverse and the Frobenius coefficients.

use core::fmt;
use num_bigint::BigUint;

use crate::error::Result;
use bls381_params::bls12_381::FQ_SIZE;

mod extension;
mod fq;
mod fq12;
mod fq2;
mod fq6;

pub use extension::{Extension, Tower};
pub use fq::Fq;
pub(crate) use fq::parse_hex_const;
pub use fq12::{Fq12, Fq12Tower};
pub use fq2::{Fq2, Fq2Tower};
pub use fq6::{Fq6, Fq6Tower};

/// Algebraic contract shared by every field in the tower
///
/// Values are immutable: every operation returns a new element.
pub trait Field: Clone + PartialEq + Eq + fmt::Debug + Send + Sync + Sized + 'static {
    /// Degree of this field over Fq
    const DEGREE: usize;

    /// Size of the canonical big-endian encoding in bytes
    const SIZE: usize = Self::DEGREE * FQ_SIZE;

    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Embed a base field element
    fn from_fq(value: &Fq) -> Self;

    /// Embed a small integer
    fn from_u64(value: u64) -> Self {
        Self::from_fq(&Fq::from(value))
    }

    /// Whether this is the additive identity
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Field addition
    fn add(&self, rhs: &Self) -> Self;

    /// Field subtraction
    fn sub(&self, rhs: &Self) -> Self;

    /// Field multiplication
    fn mul(&self, rhs: &Self) -> Self;

    /// Additive inverse
    fn neg(&self) -> Self;

    /// Squaring
    fn square(&self) -> Self {
        self.mul(self)
    }

    /// Doubling
    fn double(&self) -> Self {
        self.add(self)
    }

    /// Multiplicative inverse, `None` for zero
    fn invert(&self) -> Option<Self>;

    /// Division, `None` when `rhs` is zero
    fn div(&self, rhs: &Self) -> Option<Self> {
        rhs.invert().map(|inv| self.mul(&inv))
    }

    /// Exponentiation by square-and-multiply, most significant bit first
    fn pow(&self, exp: &BigUint) -> Self {
        let mut result = Self::one();
        for i in (0..exp.bits()).rev() {
            result = result.square();
            if exp.bit(i) {
                result = result.mul(self);
            }
        }
        result
    }

    /// Frobenius endomorphism `x -> x^(Q^i)`
    fn qi_power(&self, i: usize) -> Self;

    /// Sign used by compressed point encodings
    ///
    /// For Fq this is `value > (Q - 1) / 2`. For extensions it is the sign of
    /// the highest non-zero coefficient.
    fn sign_flag(&self) -> bool;

    /// Big-endian encoding, highest coefficient first
    fn to_bytes(&self) -> Vec<u8>;

    /// Decode a canonical encoding produced by [`Field::to_bytes`]
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
}

/// Fields with a square-root algorithm (Fq and Fq2)
pub trait SquareRoot: Field {
    /// A square root of `self`, or [`Error::NoSquareRoot`](crate::Error::NoSquareRoot)
    fn sqrt(&self) -> Result<Self>;
}

/// Lossless embedding of a narrower field into a wider one
///
/// Mixed-degree arithmetic always widens the narrow operand and computes in
/// the wider field.
pub trait EmbedsInto<W: Field>: Field {
    /// The same value as an element of `W`
    fn embed(&self) -> W;

    /// `self + rhs` computed in `W`
    fn add_wide(&self, rhs: &W) -> W {
        self.embed().add(rhs)
    }

    /// `self - rhs` computed in `W`
    fn sub_wide(&self, rhs: &W) -> W {
        self.embed().sub(rhs)
    }

    /// `self * rhs` computed in `W`
    fn mul_wide(&self, rhs: &W) -> W {
        self.embed().mul(rhs)
    }
}

impl<F: Field> EmbedsInto<F> for F {
    fn embed(&self) -> F {
        self.clone()
    }
}

macro_rules! embed_fq {
    ($($wide:ty),*) => {
        $(
            impl EmbedsInto<$wide> for Fq {
                fn embed(&self) -> $wide {
                    <$wide>::from_fq(self)
                }
            }
        )*
    };
}

embed_fq!(Fq2, Fq6, Fq12);

impl EmbedsInto<Fq6> for Fq2 {
    fn embed(&self) -> Fq6 {
        Fq6::from_base(self.clone())
    }
}

impl EmbedsInto<Fq12> for Fq2 {
    fn embed(&self) -> Fq12 {
        Fq12::from_base(Fq6::from_base(self.clone()))
    }
}

impl EmbedsInto<Fq12> for Fq6 {
    fn embed(&self) -> Fq12 {
        Fq12::from_base(self.clone())
    }
}
