//! Pairing tests for BLS12-381

use num_bigint::BigUint;

use super::super::field::{Field, Fq12};
use super::super::pairing::{add_line_eval, double_line_eval, final_exponentiation, miller_loop};
use super::super::{
    ate_pairing, ate_pairing_multi, g1_generator, g2_generator, group_order, AffinePoint,
    G1Point, G2Point, G1_CURVE,
};

fn scalar(value: u64) -> BigUint {
    BigUint::from(value)
}

// ============================================================================
// Basic Pairing Tests
// ============================================================================

#[test]
fn test_pairing_is_non_degenerate() {
    let e = ate_pairing(&g1_generator(), &g2_generator());
    assert_ne!(e, Fq12::one());
    assert_ne!(e, Fq12::zero());
}

#[test]
fn test_pairing_has_group_order() {
    let e = ate_pairing(&g1_generator(), &g2_generator());
    assert_eq!(e.pow(group_order()), Fq12::one());
}

#[test]
fn test_pairing_bilinearity() {
    let p = g1_generator();
    let q = g2_generator();
    let e = ate_pairing(&p, &q);

    // e(aP, bQ) == e(P, Q)^(ab)
    let left = ate_pairing(&p.multiply(&scalar(3)), &q.multiply(&scalar(5)));
    assert_eq!(left, e.pow(&scalar(15)));

    // e(aP, Q) == e(P, aQ)
    let left = ate_pairing(&p.multiply(&scalar(7)), &q);
    let right = ate_pairing(&p, &q.multiply(&scalar(7)));
    assert_eq!(left, right);
}

#[test]
fn test_pairing_is_additive_in_each_argument() {
    let p1 = g1_generator().multiply(&scalar(2));
    let p2 = g1_generator().multiply(&scalar(3));
    let q = g2_generator().multiply(&scalar(4));

    let left = ate_pairing(&p1.add(&p2), &q);
    let right = ate_pairing(&p1, &q).mul(&ate_pairing(&p2, &q));
    assert_eq!(left, right);
}

#[test]
fn test_pairing_with_infinity_is_one() {
    assert_eq!(ate_pairing(&G1Point::infinity(), &g2_generator()), Fq12::one());
    assert_eq!(ate_pairing(&g1_generator(), &G2Point::infinity()), Fq12::one());
}

// ============================================================================
// Multi-Pairing Tests
// ============================================================================

#[test]
fn test_multi_pairing_cancels_negation() {
    let p = g1_generator().multiply(&scalar(6));
    let q = g2_generator();
    let product = ate_pairing_multi(&[p.clone(), p.negate()], &[q.clone(), q])
        .expect("matching lengths");
    assert_eq!(product, Fq12::one());
}

#[test]
fn test_multi_pairing_matches_product() {
    let ps = [g1_generator(), g1_generator().multiply(&scalar(2))];
    let qs = [g2_generator().multiply(&scalar(3)), g2_generator()];
    let product = ate_pairing_multi(&ps, &qs).expect("matching lengths");
    let expected = ate_pairing(&ps[0], &qs[0]).mul(&ate_pairing(&ps[1], &qs[1]));
    assert_eq!(product, expected);
}

#[test]
fn test_multi_pairing_empty_is_one() {
    assert_eq!(ate_pairing_multi(&[], &[]).expect("empty input"), Fq12::one());
}

// ============================================================================
// Miller Loop Tests
// ============================================================================

#[test]
fn test_line_functions_at_generator() {
    let p = AffinePoint::generator();
    let r = g2_generator().multiply(&scalar(2)).to_affine();
    let q = g2_generator().to_affine();

    assert!(r.untwist().is_on_curve());
    assert!(!double_line_eval(&r, &p).is_zero());
    assert!(!add_line_eval(&r, &q, &p).is_zero());

    // R = -Q gives the vertical line P.x - R.x
    let vertical = add_line_eval(&q.negate(), &q, &p);
    let expected = Fq12::from_fq(&p.x).sub(&q.negate().untwist().x);
    assert_eq!(vertical, expected);
}

#[test]
fn test_final_exponentiation_kills_subfield_elements() {
    // Elements of Fq are (q - 1)-th roots of unity after the easy part
    let f = Fq12::from_u64(12345);
    assert_eq!(final_exponentiation(&f, &G1_CURVE), Fq12::one());
}

#[test]
fn test_miller_loop_then_final_exponentiation() {
    let p = AffinePoint::generator();
    let q = AffinePoint::generator();
    let t = G1_CURVE.ate_loop_count();
    let f = miller_loop(&t, &p, &q);
    let e = final_exponentiation(&f, &G1_CURVE);
    assert_eq!(e, ate_pairing(&g1_generator(), &g2_generator()));
}
