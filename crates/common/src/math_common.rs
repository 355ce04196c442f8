//! Modular arithmetic over arbitrary-precision integers
//!
//! All helpers take the modulus explicitly and return values reduced into
//! `[0, m)`. Signed inputs are reduced with the sign folded back into the
//! range, so `modulo(-1, m) == m - 1`.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Signed, Zero};

/// Reduce a signed value into `[0, m)`
pub fn modulo(value: &BigInt, m: &BigUint) -> BigUint {
    let m_signed = BigInt::from_biguint(Sign::Plus, m.clone());
    let mut r = value % &m_signed;
    if r.is_negative() {
        r += &m_signed;
    }
    // r is non-negative here
    r.magnitude().clone()
}

/// Perform modular exponentiation (a^b mod m)
pub fn mod_exp(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    if m.is_one() {
        return BigUint::zero();
    }
    a.modpow(b, m)
}

/// Perform modular addition: (a + b) mod m
pub fn mod_add(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// Perform modular subtraction: (a - b) mod m
pub fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let b = b % m;
    (a + m - b) % m
}

/// Perform modular multiplication: (a * b) mod m
pub fn mod_mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// Perform modular negation: (-a) mod m
pub fn mod_neg(a: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    if a.is_zero() {
        a
    } else {
        m - a
    }
}

/// Extended Euclidean algorithm to compute a^(-1) mod m
///
/// Returns `None` when `a` and `m` are not coprime, which includes `a == 0`.
/// The running time depends on the input value.
pub fn mod_inv(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m.is_zero() || m.is_one() {
        return None;
    }

    let a = a % m;
    if a.is_zero() {
        return None;
    }

    let mut old_r = BigInt::from(a);
    let mut r = BigInt::from(m.clone());
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let q = &old_r / &r;

        let next_r = &old_r - &q * &r;
        old_r = core::mem::replace(&mut r, next_r);

        let next_s = &old_s - &q * &s;
        old_s = core::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return None;
    }

    Some(modulo(&old_s, m))
}

/// Euler's criterion: `a^((m-1)/2) == 1 (mod m)` for an odd prime `m`
///
/// Zero is treated as a residue.
pub fn is_quadratic_residue(a: &BigUint, m: &BigUint) -> bool {
    let a = a % m;
    if a.is_zero() {
        return true;
    }
    let exp = (m - 1u32) >> 1;
    mod_exp(&a, &exp, m).is_one()
}

/// Square root modulo an odd prime `m`
///
/// Uses the `m = 3 (mod 4)` and `m = 5 (mod 8)` shortcuts and falls back to
/// Tonelli-Shanks. Returns `None` if `a` is not a quadratic residue.
pub fn mod_sqrt(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let a = a % m;
    if a.is_zero() {
        return Some(a);
    }
    if !is_quadratic_residue(&a, m) {
        return None;
    }

    let m_mod_8 = (m % 8u32).to_u32_digits().first().copied().unwrap_or(0);

    if m_mod_8 % 4 == 3 {
        let exp = (m + 1u32) >> 2;
        return Some(mod_exp(&a, &exp, m));
    }

    if m_mod_8 == 5 {
        // Atkin: v^((m+3)/8) is a root up to a factor of sqrt(-1) = 2^((m-1)/4)
        let exp = (m + 3u32) >> 3;
        let candidate = mod_exp(&a, &exp, m);
        if mod_mul(&candidate, &candidate, m) == a {
            return Some(candidate);
        }
        let two = BigUint::from(2u32);
        let i = mod_exp(&two, &((m - 1u32) >> 2), m);
        return Some(mod_mul(&candidate, &i, m));
    }

    tonelli_shanks(&a, m)
}

fn tonelli_shanks(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    // m - 1 = q * 2^s with q odd
    let m_minus_1 = m - 1u32;
    let s = m_minus_1.trailing_zeros()?;
    let q = &m_minus_1 >> s;

    let mut z = BigUint::from(2u32);
    while is_quadratic_residue(&z, m) {
        z += 1u32;
        if &z >= m {
            return None;
        }
    }

    let mut big_m = s;
    let mut c = mod_exp(&z, &q, m);
    let mut t = mod_exp(a, &q, m);
    let mut r = mod_exp(a, &((&q + 1u32) >> 1), m);

    loop {
        if t.is_zero() {
            return Some(BigUint::zero());
        }
        if t.is_one() {
            return Some(r);
        }

        // least i with t^(2^i) == 1
        let mut i = 0u64;
        let mut t2 = t.clone();
        while !t2.is_one() {
            t2 = mod_mul(&t2, &t2, m);
            i += 1;
            if i == big_m {
                return None;
            }
        }

        let mut b = c.clone();
        for _ in 0..(big_m - i - 1) {
            b = mod_mul(&b, &b, m);
        }
        big_m = i;
        c = mod_mul(&b, &b, m);
        t = mod_mul(&t, &c, m);
        r = mod_mul(&r, &b, m);
    }
}
