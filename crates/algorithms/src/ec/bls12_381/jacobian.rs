//! Jacobian points, generic over the coordinate field
//!
//! `(X, Y, Z)` represents the affine point `(X / Z^2, Y / Z^3)`. The point at
//! infinity is stored as `(1, 1, 0)`.

use core::fmt;
use core::iter::Sum;
use core::ops;

use bls381_api::{Result as ApiResult, Serialize};
use num_bigint::BigUint;
use num_traits::Zero;

use super::affine::AffinePoint;
use super::codec;
use super::curve::{CurveField, EllipticCurveParams};
use super::field::{Field, SquareRoot};
use crate::error::{Error, Result};

/// Point in Jacobian coordinates
#[derive(Clone)]
pub struct JacobianPoint<F: Field> {
    /// X coordinate
    pub x: F,
    /// Y coordinate
    pub y: F,
    /// Z coordinate, zero at infinity
    pub z: F,
    /// Whether this is the point at infinity
    pub infinity: bool,
    curve: &'static EllipticCurveParams<F>,
}

impl<F: Field> JacobianPoint<F> {
    /// Create a point without checking the curve equation
    pub fn new(x: F, y: F, z: F, infinity: bool, curve: &'static EllipticCurveParams<F>) -> Self {
        Self {
            x,
            y,
            z,
            infinity,
            curve,
        }
    }

    /// The point at infinity of `curve`
    pub fn infinity_on(curve: &'static EllipticCurveParams<F>) -> Self {
        Self::new(F::one(), F::one(), F::zero(), true, curve)
    }

    /// The generator of `curve`
    pub fn generator_on(curve: &'static EllipticCurveParams<F>) -> Self {
        Self::from_affine(&AffinePoint::generator_on(curve))
    }

    /// Lift an affine point with `Z = 1`
    pub fn from_affine(point: &AffinePoint<F>) -> Self {
        if point.infinity {
            return Self::infinity_on(point.curve());
        }
        Self::new(
            point.x.clone(),
            point.y.clone(),
            F::one(),
            false,
            point.curve(),
        )
    }

    /// Curve this point belongs to
    pub fn curve(&self) -> &'static EllipticCurveParams<F> {
        self.curve
    }

    /// Whether this is the point at infinity
    pub fn is_infinity(&self) -> bool {
        self.infinity || self.z.is_zero()
    }

    /// Affine form `(X / Z^2, Y / Z^3)`
    pub fn to_affine(&self) -> AffinePoint<F> {
        if self.is_infinity() {
            return AffinePoint::infinity_on(self.curve);
        }
        let Some(z_inv) = self.z.invert() else {
            return AffinePoint::infinity_on(self.curve);
        };
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2.mul(&z_inv);
        AffinePoint::new(
            self.x.mul(&z_inv2),
            self.y.mul(&z_inv3),
            false,
            self.curve,
        )
    }

    /// Whether the affine form satisfies the curve equation
    pub fn is_on_curve(&self) -> bool {
        self.to_affine().is_on_curve()
    }

    /// On the curve and in the order-N subgroup
    pub fn is_valid(&self) -> bool {
        self.is_on_curve() && self.multiply(&self.curve.n).is_infinity()
    }

    /// Point doubling
    pub fn double(&self) -> Self {
        if self.is_infinity() || self.y.is_zero() {
            return Self::infinity_on(self.curve);
        }

        let y2 = self.y.square();
        let s = F::from_u64(4).mul(&self.x).mul(&y2);
        let mut m = F::from_u64(3).mul(&self.x.square());
        if !self.curve.a.is_zero() {
            let z4 = self.z.square().square();
            m = m.add(&self.curve.a.mul(&z4));
        }

        let x = m.square().sub(&s.double());
        let y = m
            .mul(&s.sub(&x))
            .sub(&F::from_u64(8).mul(&y2.square()));
        let z = self.y.double().mul(&self.z);
        Self::new(x, y, z, false, self.curve)
    }

    /// Point addition
    pub fn add(&self, other: &Self) -> Self {
        if self.is_infinity() {
            return other.clone();
        }
        if other.is_infinity() {
            return self.clone();
        }

        let z1_2 = self.z.square();
        let z2_2 = other.z.square();
        let u1 = self.x.mul(&z2_2);
        let u2 = other.x.mul(&z1_2);
        let s1 = self.y.mul(&z2_2).mul(&other.z);
        let s2 = other.y.mul(&z1_2).mul(&self.z);

        if u1 == u2 {
            if s1 != s2 {
                return Self::infinity_on(self.curve);
            }
            return self.double();
        }

        let h = u2.sub(&u1);
        let r = s2.sub(&s1);
        let h2 = h.square();
        let h3 = h2.mul(&h);
        let u1h2 = u1.mul(&h2);

        let x = r.square().sub(&h3).sub(&u1h2.double());
        let y = r.mul(&u1h2.sub(&x)).sub(&s1.mul(&h3));
        let z = h.mul(&self.z).mul(&other.z);
        Self::new(x, y, z, false, self.curve)
    }

    /// Reflection across the x-axis
    pub fn negate(&self) -> Self {
        Self::new(
            self.x.clone(),
            self.y.neg(),
            self.z.clone(),
            self.infinity,
            self.curve,
        )
    }

    /// Scalar multiplication, left-to-right double-and-add
    ///
    /// The sequence of operations depends on the bits of `scalar`.
    pub fn multiply(&self, scalar: &BigUint) -> Self {
        if self.is_infinity() || scalar.is_zero() {
            return Self::infinity_on(self.curve);
        }
        let mut result = Self::infinity_on(self.curve);
        for i in (0..scalar.bits()).rev() {
            result = result.double();
            if scalar.bit(i) {
                result = result.add(self);
            }
        }
        result
    }

    /// Compressed encoding
    pub fn to_bytes(&self) -> Vec<u8> {
        codec::encode(self)
    }

    /// Compressed encoding as lowercase hex
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl<F: CurveField> JacobianPoint<F> {
    /// The point at infinity of the default curve over `F`
    pub fn infinity() -> Self {
        Self::infinity_on(F::curve())
    }

    /// The generator of the default curve over `F`
    pub fn generator() -> Self {
        Self::generator_on(F::curve())
    }
}

impl<F: CurveField + SquareRoot> JacobianPoint<F> {
    /// Decode a compressed encoding onto the default curve over `F`
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        codec::decode(bytes, F::curve())
    }

    /// Decode a hex compressed encoding
    pub fn from_hex(encoded: &str) -> Result<Self> {
        let bytes = hex::decode(encoded.strip_prefix("0x").unwrap_or(encoded))
            .map_err(|_| Error::encoding("point hex", "not a hexadecimal string"))?;
        Self::from_bytes(&bytes)
    }
}

impl<F: Field> PartialEq for JacobianPoint<F> {
    fn eq(&self, other: &Self) -> bool {
        self.to_affine() == other.to_affine()
    }
}

impl<F: Field> Eq for JacobianPoint<F> {}

impl<F: Field> fmt::Debug for JacobianPoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinity() {
            return write!(f, "JacobianPoint<{}>(infinity)", self.curve.name);
        }
        f.debug_struct("JacobianPoint")
            .field("curve", &self.curve.name)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl<'a, F: Field> ops::Add<&'a JacobianPoint<F>> for &'a JacobianPoint<F> {
    type Output = JacobianPoint<F>;

    fn add(self, rhs: &'a JacobianPoint<F>) -> JacobianPoint<F> {
        JacobianPoint::add(self, rhs)
    }
}

impl<F: Field> ops::Add for JacobianPoint<F> {
    type Output = JacobianPoint<F>;

    fn add(self, rhs: JacobianPoint<F>) -> JacobianPoint<F> {
        JacobianPoint::add(&self, &rhs)
    }
}

impl<F: Field> ops::Neg for &JacobianPoint<F> {
    type Output = JacobianPoint<F>;

    fn neg(self) -> JacobianPoint<F> {
        self.negate()
    }
}

impl<F: Field> ops::Neg for JacobianPoint<F> {
    type Output = JacobianPoint<F>;

    fn neg(self) -> JacobianPoint<F> {
        self.negate()
    }
}

impl<F: Field> ops::Mul<&BigUint> for &JacobianPoint<F> {
    type Output = JacobianPoint<F>;

    fn mul(self, scalar: &BigUint) -> JacobianPoint<F> {
        self.multiply(scalar)
    }
}

impl<F: CurveField> Sum for JacobianPoint<F> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::infinity(), |acc, p| JacobianPoint::add(&acc, &p))
    }
}

impl<'a, F: CurveField> Sum<&'a JacobianPoint<F>> for JacobianPoint<F> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::infinity(), |acc, p| JacobianPoint::add(&acc, p))
    }
}

impl<F: CurveField + SquareRoot> Serialize for JacobianPoint<F> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        JacobianPoint::from_bytes(bytes).map_err(Into::into)
    }

    fn to_bytes(&self) -> Vec<u8> {
        codec::encode(self)
    }
}
