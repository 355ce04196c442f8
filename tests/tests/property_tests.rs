//! Property-based tests for field, group, pairing and signature invariants

use bls381_algorithms::{g1_generator, g2_generator, Field, Fq, Fq2, G1Point, G2Point};
use bls381_algorithms::ec::bls12_381::ate_pairing;
use bls381_sign::{key_gen, BasicScheme, PopScheme, SignatureScheme};
use num_bigint::BigUint;
use proptest::prelude::*;

fn fq(bytes: &[u8]) -> Fq {
    Fq::new(BigUint::from_bytes_be(bytes))
}

fn fq2(a: &[u8], b: &[u8]) -> Fq2 {
    Fq2::from_pair(fq(a), fq(b))
}

// ============================================================================
// Field Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_fq_add_sub_inverse(a in any::<[u8; 48]>(), b in any::<[u8; 48]>()) {
        let (a, b) = (fq(&a), fq(&b));
        prop_assert_eq!(a.add(&b).sub(&b), a.clone());
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn prop_fq_mul_inverse(a in any::<[u8; 48]>()) {
        let a = fq(&a);
        prop_assume!(!a.is_zero());
        let inv = a.invert().unwrap();
        prop_assert_eq!(a.mul(&inv), Fq::one());
    }

    #[test]
    fn prop_fq2_mul_inverse(a in any::<[u8; 48]>(), b in any::<[u8; 48]>()) {
        let x = fq2(&a, &b);
        prop_assume!(!x.is_zero());
        prop_assert_eq!(x.mul(&x.invert().unwrap()), Fq2::one());
    }

    #[test]
    fn prop_fq2_square_has_root(a in any::<[u8; 48]>(), b in any::<[u8; 48]>()) {
        use bls381_algorithms::ec::bls12_381::SquareRoot;
        let square = fq2(&a, &b).square();
        let root = square.sqrt().unwrap();
        prop_assert_eq!(root.square(), square);
    }
}

// ============================================================================
// Group Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_g1_scalar_distributes(a in 1u64..1_000_000, b in 1u64..1_000_000) {
        let g = g1_generator();
        let left = g.multiply(&BigUint::from(a)).add(&g.multiply(&BigUint::from(b)));
        prop_assert_eq!(left, g.multiply(&BigUint::from(a + b)));
    }

    #[test]
    fn prop_g1_double_add_triple(k in 1u64..u64::MAX) {
        let p = g1_generator().multiply(&BigUint::from(k));
        prop_assert_eq!(p.double().add(&p), p.multiply(&BigUint::from(3u32)));
    }

    #[test]
    fn prop_g1_encoding_roundtrip(k in 0u64..u64::MAX) {
        let p = g1_generator().multiply(&BigUint::from(k));
        prop_assert_eq!(G1Point::from_bytes(&p.to_bytes()).unwrap(), p);
    }

    #[test]
    fn prop_g2_encoding_roundtrip(k in 0u64..u64::MAX) {
        let p = g2_generator().multiply(&BigUint::from(k));
        prop_assert_eq!(G2Point::from_bytes(&p.to_bytes()).unwrap(), p);
    }
}

// ============================================================================
// Pairing and Signature Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn prop_pairing_bilinear(a in 1u64..1000, b in 1u64..1000) {
        let (a, b) = (BigUint::from(a), BigUint::from(b));
        let left = ate_pairing(&g1_generator().multiply(&a), &g2_generator().multiply(&b));
        let right = ate_pairing(&g1_generator(), &g2_generator()).pow(&(a * b));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_basic_sign_verify(seed in any::<[u8; 32]>(), message in prop::collection::vec(any::<u8>(), 0..64)) {
        let sk = key_gen(&seed).unwrap();
        let pk = sk.get_g1();
        let sig = BasicScheme::sign(&sk, &message).unwrap();
        prop_assert!(BasicScheme::verify(&pk, &message, &sig));

        let mut tampered = message.clone();
        tampered.push(0);
        prop_assert!(!BasicScheme::verify(&pk, &tampered, &sig));
    }

    #[test]
    fn prop_pop_roundtrip(seed in any::<[u8; 32]>()) {
        let sk = key_gen(&seed).unwrap();
        let proof = PopScheme::pop_prove(&sk).unwrap();
        prop_assert!(PopScheme::pop_verify(&sk.get_g1(), &proof));
    }
}
