//! Affine points, generic over the coordinate field

use core::fmt;

use num_bigint::BigUint;
use once_cell::sync::Lazy;

use super::curve::{CurveField, EllipticCurveParams, FQ12_CURVE, G2_CURVE};
use super::field::{Field, Fq12, Fq2, Fq6};
use super::jacobian::JacobianPoint;

/// `w^-2`, scaling the x-coordinate of an untwisted point
///
/// `w` is a unit of Fq12, so neither inversion falls back to zero.
static UNTWIST_X: Lazy<Fq12> = Lazy::new(|| Fq12::w_squared().invert().unwrap_or_else(Fq12::zero));

/// `w^-3`, scaling the y-coordinate of an untwisted point
static UNTWIST_Y: Lazy<Fq12> = Lazy::new(|| Fq12::w_cubed().invert().unwrap_or_else(Fq12::zero));

/// Point `(x, y)` on a short Weierstrass curve, or the point at infinity
#[derive(Clone)]
pub struct AffinePoint<F: Field> {
    /// x-coordinate (zero at infinity)
    pub x: F,
    /// y-coordinate (zero at infinity)
    pub y: F,
    /// Whether this is the point at infinity
    pub infinity: bool,
    curve: &'static EllipticCurveParams<F>,
}

impl<F: Field> AffinePoint<F> {
    /// Create a point without checking the curve equation
    pub fn new(x: F, y: F, infinity: bool, curve: &'static EllipticCurveParams<F>) -> Self {
        Self {
            x,
            y,
            infinity,
            curve,
        }
    }

    /// The point at infinity of `curve`
    pub fn infinity_on(curve: &'static EllipticCurveParams<F>) -> Self {
        Self::new(F::zero(), F::zero(), true, curve)
    }

    /// The generator of `curve`
    pub fn generator_on(curve: &'static EllipticCurveParams<F>) -> Self {
        Self::new(curve.gx.clone(), curve.gy.clone(), false, curve)
    }

    /// Curve this point belongs to
    pub fn curve(&self) -> &'static EllipticCurveParams<F> {
        self.curve
    }

    /// Whether `y^2 = x^3 + a x + b` holds
    pub fn is_on_curve(&self) -> bool {
        self.infinity || self.y.square() == self.curve.rhs(&self.x)
    }

    /// Tangent doubling
    pub fn double(&self) -> Self {
        if self.infinity {
            return self.clone();
        }
        let numerator = F::from_u64(3).mul(&self.x.square()).add(&self.curve.a);
        let Some(slope) = numerator.div(&self.y.double()) else {
            // vertical tangent
            return Self::infinity_on(self.curve);
        };
        let x = slope.square().sub(&self.x).sub(&self.x);
        let y = slope.mul(&self.x.sub(&x)).sub(&self.y);
        Self::new(x, y, false, self.curve)
    }

    /// Chord-and-tangent addition
    pub fn add(&self, other: &Self) -> Self {
        if self.infinity {
            return other.clone();
        }
        if other.infinity {
            return self.clone();
        }
        if self == other {
            return self.double();
        }
        let Some(slope) = other.y.sub(&self.y).div(&other.x.sub(&self.x)) else {
            // same x, opposite y
            return Self::infinity_on(self.curve);
        };
        let x = slope.square().sub(&self.x).sub(&other.x);
        let y = slope.mul(&self.x.sub(&x)).sub(&self.y);
        Self::new(x, y, false, self.curve)
    }

    /// Reflection across the x-axis
    pub fn negate(&self) -> Self {
        Self::new(self.x.clone(), self.y.neg(), self.infinity, self.curve)
    }

    /// Scalar multiplication through Jacobian coordinates
    pub fn multiply(&self, scalar: &BigUint) -> Self {
        self.to_jacobian().multiply(scalar).to_affine()
    }

    /// Jacobian form with `Z = 1`
    pub fn to_jacobian(&self) -> JacobianPoint<F> {
        JacobianPoint::from_affine(self)
    }
}

impl<F: CurveField> AffinePoint<F> {
    /// The point at infinity of the default curve over `F`
    pub fn infinity() -> Self {
        Self::infinity_on(F::curve())
    }

    /// The generator of the default curve over `F`
    pub fn generator() -> Self {
        Self::generator_on(F::curve())
    }
}

impl AffinePoint<Fq2> {
    /// Map a twist point into `E(Fq12)`: `(x / w^2, y / w^3)`
    pub fn untwist(&self) -> AffinePoint<Fq12> {
        if self.infinity {
            return AffinePoint::infinity_on(&FQ12_CURVE);
        }
        let x = Fq12::from_base(Fq6::from_base(self.x.clone()));
        let y = Fq12::from_base(Fq6::from_base(self.y.clone()));
        AffinePoint::new(
            x.mul(&UNTWIST_X),
            y.mul(&UNTWIST_Y),
            false,
            &FQ12_CURVE,
        )
    }
}

impl AffinePoint<Fq12> {
    /// Inverse of [`AffinePoint::untwist`]: `(x w^2, y w^3)` projected back to Fq2
    pub fn twist(&self) -> AffinePoint<Fq2> {
        if self.infinity {
            return AffinePoint::infinity_on(&G2_CURVE);
        }
        let x = self.x.mul(&Fq12::w_squared());
        let y = self.y.mul(&Fq12::w_cubed());
        AffinePoint::new(
            x.coeff(0).coeff(0).clone(),
            y.coeff(0).coeff(0).clone(),
            false,
            &G2_CURVE,
        )
    }
}

impl<F: Field> PartialEq for AffinePoint<F> {
    fn eq(&self, other: &Self) -> bool {
        if self.infinity || other.infinity {
            return self.infinity == other.infinity;
        }
        self.x == other.x && self.y == other.y
    }
}

impl<F: Field> Eq for AffinePoint<F> {}

impl<F: Field> fmt::Debug for AffinePoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity {
            return write!(f, "AffinePoint<{}>(infinity)", self.curve.name);
        }
        f.debug_struct("AffinePoint")
            .field("curve", &self.curve.name)
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}
