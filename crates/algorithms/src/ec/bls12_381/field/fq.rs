//! Prime field Fq of BLS12-381

use core::fmt;

use bls381_common::{is_quadratic_residue, mod_add, mod_inv, mod_mul, mod_neg, mod_sqrt, mod_sub, modulo};
use bls381_params::bls12_381::{FQ_SIZE, Q};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

use super::{Field, SquareRoot};
use crate::error::{validate, Error, Result};

static MODULUS: Lazy<BigUint> = Lazy::new(|| parse_hex_const(Q));

/// (Q - 1) / 2, the boundary of the lexicographic sign
static HALF_MODULUS: Lazy<BigUint> = Lazy::new(|| (&*MODULUS - 1u32) >> 1u32);

/// Parse a hex constant from the params crate
///
/// The zero fallback is unreachable for the shipped constants: every one of
/// them is parsed with a checked parser in `tests/constants.rs`.
pub(crate) fn parse_hex_const(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).unwrap_or_default()
}

/// Element of the prime field, always reduced into `[0, Q)`
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fq {
    value: BigUint,
}

impl Fq {
    /// Create an element, reducing `value` modulo Q
    pub fn new(value: BigUint) -> Self {
        let modulus = Self::modulus();
        if &value < modulus {
            Self { value }
        } else {
            Self { value: value % modulus }
        }
    }

    /// Create an element from a signed integer
    pub fn from_bigint(value: &BigInt) -> Self {
        Self {
            value: modulo(value, Self::modulus()),
        }
    }

    /// Create an element from a signed machine integer
    pub fn from_i64(value: i64) -> Self {
        Self::from_bigint(&BigInt::from(value))
    }

    /// Parse a big-endian hex string, with or without a `0x` prefix
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix("0x").unwrap_or(hex);
        BigUint::parse_bytes(digits.as_bytes(), 16)
            .map(Self::new)
            .ok_or_else(|| Error::encoding("Fq hex", "not a hexadecimal integer"))
    }

    pub(crate) fn from_hex_const(hex: &str) -> Self {
        Self::new(parse_hex_const(hex))
    }

    /// The field modulus Q
    pub fn modulus() -> &'static BigUint {
        &MODULUS
    }

    /// The canonical representative in `[0, Q)`
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Parity of the canonical representative
    pub fn is_odd(&self) -> bool {
        self.value.bit(0)
    }

    /// Euler's criterion
    pub fn is_square(&self) -> bool {
        is_quadratic_residue(&self.value, Self::modulus())
    }

    /// Legendre symbol: 1 for a non-zero square, -1 for a non-square, 0 for zero
    pub fn legendre(&self) -> i8 {
        if self.value.is_zero() {
            0
        } else if self.is_square() {
            1
        } else {
            -1
        }
    }
}

impl From<u64> for Fq {
    fn from(value: u64) -> Self {
        Self::new(BigUint::from(value))
    }
}

impl Field for Fq {
    const DEGREE: usize = 1;

    fn zero() -> Self {
        Self {
            value: BigUint::zero(),
        }
    }

    fn one() -> Self {
        Self {
            value: BigUint::one(),
        }
    }

    fn from_fq(value: &Fq) -> Self {
        value.clone()
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn add(&self, rhs: &Self) -> Self {
        Self {
            value: mod_add(&self.value, &rhs.value, Self::modulus()),
        }
    }

    fn sub(&self, rhs: &Self) -> Self {
        Self {
            value: mod_sub(&self.value, &rhs.value, Self::modulus()),
        }
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self {
            value: mod_mul(&self.value, &rhs.value, Self::modulus()),
        }
    }

    fn neg(&self) -> Self {
        Self {
            value: mod_neg(&self.value, Self::modulus()),
        }
    }

    fn invert(&self) -> Option<Self> {
        mod_inv(&self.value, Self::modulus()).map(|value| Self { value })
    }

    fn pow(&self, exp: &BigUint) -> Self {
        Self {
            value: self.value.modpow(exp, Self::modulus()),
        }
    }

    fn qi_power(&self, _i: usize) -> Self {
        self.clone()
    }

    fn sign_flag(&self) -> bool {
        self.value > *HALF_MODULUS
    }

    fn to_bytes(&self) -> Vec<u8> {
        let raw = self.value.to_bytes_be();
        let mut out = vec![0u8; FQ_SIZE];
        out[FQ_SIZE - raw.len()..].copy_from_slice(&raw);
        out
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("Fq", bytes.len(), FQ_SIZE)?;
        let value = BigUint::from_bytes_be(bytes);
        if &value >= Self::modulus() {
            return Err(Error::encoding("Fq", "value is not reduced modulo Q"));
        }
        Ok(Self { value })
    }
}

impl SquareRoot for Fq {
    fn sqrt(&self) -> Result<Self> {
        mod_sqrt(&self.value, Self::modulus())
            .map(|value| Self { value })
            .ok_or(Error::NoSquareRoot)
    }
}

impl fmt::Debug for Fq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fq(0x{:x})", self.value)
    }
}

impl fmt::Display for Fq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.value)
    }
}
