//! Generic extension field over a base field of the tower

use core::array;
use core::fmt;
use core::marker::PhantomData;

use super::{Field, Fq};
use crate::error::{validate, Result};

/// Descriptor of one level of the tower
///
/// `N` is the number of base-field coefficients of an element.
pub trait Tower<const N: usize>: Sized + Send + Sync + 'static {
    /// Field the coefficients live in
    type Base: Field;

    /// Degree of the extension over Fq
    const DEGREE: usize;

    /// Display name
    const NAME: &'static str;

    /// Non-residue `r` with `u^N = r` for the adjoined element `u`
    fn root() -> &'static Self::Base;

    /// Multiply a base element by the non-residue
    fn mul_by_root(value: &Self::Base) -> Self::Base {
        value.mul(Self::root())
    }

    /// Closed-form inverse for this level
    fn invert(element: &Extension<Self, N>) -> Option<Extension<Self, N>>;

    /// Frobenius coefficient for `power` in `1..DEGREE` and `index` in `1..N`
    fn frobenius_coefficient(power: usize, index: usize) -> &'static Self::Base;
}

/// Element `c0 + c1 u + ... + c_{N-1} u^{N-1}` of an extension field
pub struct Extension<T: Tower<N>, const N: usize> {
    coeffs: [T::Base; N],
    tower: PhantomData<T>,
}

impl<T: Tower<N>, const N: usize> Extension<T, N> {
    /// Build an element from its coefficients, lowest degree first
    pub fn new(coeffs: [T::Base; N]) -> Self {
        Self {
            coeffs,
            tower: PhantomData,
        }
    }

    /// Embed a base field element as the constant coefficient
    pub fn from_base(value: T::Base) -> Self {
        let mut value = Some(value);
        Self::new(array::from_fn(|i| {
            if i == 0 {
                value.take().unwrap_or_else(T::Base::zero)
            } else {
                T::Base::zero()
            }
        }))
    }

    /// Coefficients, lowest degree first
    pub fn coeffs(&self) -> &[T::Base; N] {
        &self.coeffs
    }

    /// Coefficient `i`
    pub fn coeff(&self, i: usize) -> &T::Base {
        &self.coeffs[i]
    }

    /// Multiply every coefficient by a base field element
    pub fn scale(&self, factor: &T::Base) -> Self {
        self.map(|c| c.mul(factor))
    }

    fn map(&self, f: impl Fn(&T::Base) -> T::Base) -> Self {
        Self::new(array::from_fn(|i| f(&self.coeffs[i])))
    }

    fn zip(&self, rhs: &Self, f: impl Fn(&T::Base, &T::Base) -> T::Base) -> Self {
        Self::new(array::from_fn(|i| f(&self.coeffs[i], &rhs.coeffs[i])))
    }
}

impl<T: Tower<N>, const N: usize> Clone for Extension<T, N> {
    fn clone(&self) -> Self {
        Self::new(self.coeffs.clone())
    }
}

impl<T: Tower<N>, const N: usize> PartialEq for Extension<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs
    }
}

impl<T: Tower<N>, const N: usize> Eq for Extension<T, N> {}

impl<T: Tower<N>, const N: usize> fmt::Debug for Extension<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple(T::NAME);
        for c in &self.coeffs {
            tuple.field(c);
        }
        tuple.finish()
    }
}

impl<T: Tower<N>, const N: usize> Field for Extension<T, N> {
    const DEGREE: usize = T::DEGREE;

    fn zero() -> Self {
        Self::new(array::from_fn(|_| T::Base::zero()))
    }

    fn one() -> Self {
        Self::from_base(T::Base::one())
    }

    fn from_fq(value: &Fq) -> Self {
        Self::from_base(T::Base::from_fq(value))
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Field::is_zero)
    }

    fn add(&self, rhs: &Self) -> Self {
        self.zip(rhs, |a, b| a.add(b))
    }

    fn sub(&self, rhs: &Self) -> Self {
        self.zip(rhs, |a, b| a.sub(b))
    }

    /// Schoolbook convolution; a product landing at degree `k >= N` is
    /// multiplied by the root and folded into degree `k - N`.
    fn mul(&self, rhs: &Self) -> Self {
        let mut out: [T::Base; N] = array::from_fn(|_| T::Base::zero());
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coeffs.iter().enumerate() {
                let product = a.mul(b);
                if i + j >= N {
                    let k = i + j - N;
                    out[k] = out[k].add(&T::mul_by_root(&product));
                } else {
                    out[i + j] = out[i + j].add(&product);
                }
            }
        }
        Self::new(out)
    }

    fn neg(&self) -> Self {
        self.map(Field::neg)
    }

    fn invert(&self) -> Option<Self> {
        T::invert(self)
    }

    fn qi_power(&self, i: usize) -> Self {
        let i = i % T::DEGREE;
        if i == 0 {
            return self.clone();
        }
        Self::new(array::from_fn(|index| {
            let raised = self.coeffs[index].qi_power(i);
            if index == 0 {
                raised
            } else {
                raised.mul(T::frobenius_coefficient(i, index))
            }
        }))
    }

    fn sign_flag(&self) -> bool {
        self.coeffs
            .iter()
            .rev()
            .find(|c| !c.is_zero())
            .map(Field::sign_flag)
            .unwrap_or(false)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.coeffs.iter().rev().flat_map(Field::to_bytes).collect()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length(T::NAME, bytes.len(), Self::SIZE)?;
        let mut decoded = Vec::with_capacity(N);
        for chunk in bytes.chunks(T::Base::SIZE).rev() {
            decoded.push(T::Base::from_bytes(chunk)?);
        }
        let mut decoded = decoded.into_iter();
        Ok(Self::new(array::from_fn(|_| {
            decoded.next().unwrap_or_else(T::Base::zero)
        })))
    }
}
