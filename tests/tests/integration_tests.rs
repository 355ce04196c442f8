//! Cross-crate integration tests

use bls381_algorithms::{Field, Fq};
use bls381_common::{is_quadratic_residue, mod_exp, mod_inv, mod_sqrt, modulo};
use bls381_params::bls12_381::{N, PRIVATE_KEY_SIZE};
use bls381_sign::{key_gen, AugScheme, BasicScheme, PopScheme, PrivateKey, SignatureScheme};
use bls381_tests::private_key_from_wide;
use num_bigint::{BigInt, BigUint};
use num_traits::Num;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

// ============================================================================
// Modular Arithmetic
// ============================================================================

#[test]
fn test_common_math_over_small_moduli() {
    let m = BigUint::from(13u32);
    assert_eq!(modulo(&BigInt::from(-1), &m), BigUint::from(12u32));
    assert_eq!(mod_inv(&BigUint::from(5u32), &m), Some(BigUint::from(8u32)));
    assert_eq!(mod_inv(&BigUint::from(0u32), &m), None);
    assert_eq!(mod_exp(&BigUint::from(2u32), &BigUint::from(12u32), &m), BigUint::from(1u32));

    // 13 = 5 mod 8
    let root = mod_sqrt(&BigUint::from(10u32), &m).unwrap();
    assert_eq!((&root * &root) % &m, BigUint::from(10u32));
    assert!(!is_quadratic_residue(&BigUint::from(2u32), &m));
    assert_eq!(mod_sqrt(&BigUint::from(2u32), &m), None);
}

#[test]
fn test_common_math_matches_field() {
    let q = Fq::modulus();
    let a = BigUint::from(987_654_321u64);
    let inv = mod_inv(&a, q).unwrap();
    assert_eq!(Fq::new(inv), Fq::new(a.clone()).invert().unwrap());
    let root = mod_sqrt(&BigUint::from(4u32), q).unwrap();
    assert_eq!(Fq::new(root).square(), Fq::from(4));
}

#[test]
fn test_params_match_algorithms() {
    let n = BigUint::from_str_radix(N.trim_start_matches("0x"), 16).unwrap();
    assert_eq!(&n, bls381_algorithms::ec::bls12_381::group_order());
    assert_eq!(PRIVATE_KEY_SIZE, PrivateKey::SIZE);
}

// ============================================================================
// End-to-End Signing
// ============================================================================

#[test]
fn test_schemes_do_not_cross_verify() {
    let sk = key_gen(&[9u8; 32]).unwrap();
    let pk = sk.get_g1();
    let message = b"cross-scheme";

    let basic = BasicScheme::sign(&sk, message).unwrap();
    let aug = AugScheme::sign(&sk, message).unwrap();
    let pop = PopScheme::sign(&sk, message).unwrap();

    assert!(BasicScheme::verify(&pk, message, &basic));
    assert!(AugScheme::verify(&pk, message, &aug));
    assert!(PopScheme::verify(&pk, message, &pop));

    assert!(!AugScheme::verify(&pk, message, &basic));
    assert!(!PopScheme::verify(&pk, message, &aug));
    assert!(!BasicScheme::verify(&pk, message, &pop));
}

#[test]
fn test_pop_fast_aggregate_with_random_keys() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let keys: Vec<PrivateKey> = (0..3).map(|_| PrivateKey::random(&mut rng).unwrap()).collect();
    let message = b"shared message";

    let pks: Vec<_> = keys.iter().map(PrivateKey::get_g1).collect();
    for (sk, pk) in keys.iter().zip(&pks) {
        assert!(PopScheme::pop_verify(pk, &PopScheme::pop_prove(sk).unwrap()));
    }
    let sigs: Vec<_> = keys.iter().map(|sk| PopScheme::sign(sk, message).unwrap()).collect();
    let agg = PopScheme::aggregate(&sigs).unwrap();
    assert!(PopScheme::fast_aggregate_verify(&pks, message, &agg));
    assert!(!PopScheme::fast_aggregate_verify(&pks[..2], message, &agg));

    // aggregate key signs like the sum of the keys
    let combined = PrivateKey::aggregate(&keys).unwrap();
    assert_eq!(PopScheme::sign(&combined, message).unwrap(), agg);
}

#[test]
fn test_aug_aggregate_allows_repeated_messages() {
    let sk1 = private_key_from_wide(&[0x11; 64]);
    let sk2 = private_key_from_wide(&[0x22; 64]);
    let message = b"same";
    let pks = [sk1.get_g1(), sk2.get_g1()];

    let sigs = [AugScheme::sign(&sk1, message).unwrap(), AugScheme::sign(&sk2, message).unwrap()];
    let messages: [&[u8]; 2] = [message, message];
    let agg = AugScheme::aggregate(&sigs).unwrap();
    assert!(AugScheme::aggregate_verify(&pks, &messages, &agg));

    let basic = [BasicScheme::sign(&sk1, message).unwrap(), BasicScheme::sign(&sk2, message).unwrap()];
    let agg = BasicScheme::aggregate(&basic).unwrap();
    assert!(!BasicScheme::aggregate_verify(&pks, &messages, &agg));
}

#[test]
fn test_private_key_bytes_roundtrip() {
    let sk = key_gen(&[3u8; 40]).unwrap();
    let restored = PrivateKey::from_bytes(sk.to_bytes().as_slice()).unwrap();
    assert_eq!(restored, sk);
    assert_eq!(restored.get_g1(), sk.get_g1());
}
