//! Known-answer tests across key generation, signing and hashing

use bls381_algorithms::ec::bls12_381::hash_to_curve::expand_message_xmd;
use bls381_algorithms::kdf::extract_expand;
use bls381_algorithms::{Fq, Fq2, G1Point};
use bls381_sign::{key_gen, AugScheme, BasicScheme, PopScheme, SignatureScheme};
use bls381_tests::vectors::{self, hash_to_g2, hkdf_case_1, hkdf_case_3};
use bls381_tests::{g1_from_hex, g2_from_hex, unhex};
use sha2::Sha512;

// ============================================================================
// Key Generation
// ============================================================================

#[test]
fn test_zero_seed_key_and_public_key() {
    let sk = key_gen(&[0u8; 32]).unwrap();
    assert_eq!(hex::encode(sk.to_bytes().as_slice()), vectors::SK1_HEX);
    assert_eq!(sk.get_g1().to_hex(), vectors::PK1_HEX);
    assert_eq!(g1_from_hex(vectors::PK1_HEX), sk.get_g1());
}

#[test]
fn test_hkdf_vectors() {
    let okm = extract_expand(
        hkdf_case_1::LENGTH,
        &unhex(hkdf_case_1::IKM),
        &unhex(hkdf_case_1::SALT),
        &unhex(hkdf_case_1::INFO),
    )
    .unwrap();
    assert_eq!(hex::encode(okm.as_slice()), hkdf_case_1::OKM);

    let okm = extract_expand(hkdf_case_3::LENGTH, &unhex(hkdf_case_3::IKM), &[], &[]).unwrap();
    assert_eq!(hex::encode(okm.as_slice()), hkdf_case_3::OKM);
}

// ============================================================================
// Basic Scheme
// ============================================================================

#[test]
fn test_basic_signature_vectors() {
    let sk1 = key_gen(&[0u8; 32]).unwrap();
    let sk2 = key_gen(&[1u8; 32]).unwrap();

    let sig1 = BasicScheme::sign(&sk1, &[7, 8, 9]).unwrap();
    let sig2 = BasicScheme::sign(&sk2, &[10, 11, 12]).unwrap();
    assert_eq!(sig1.to_hex(), vectors::SIG1_HEX);
    assert_eq!(sig2.to_hex(), vectors::SIG2_HEX);

    let agg = BasicScheme::aggregate(&[sig1, sig2]).unwrap();
    assert_eq!(agg.to_hex(), vectors::AGG_SIG1_HEX);

    let pks = [sk1.get_g1(), sk2.get_g1()];
    let messages: [&[u8]; 2] = [&[7, 8, 9], &[10, 11, 12]];
    assert!(BasicScheme::aggregate_verify(&pks, &messages, &agg));
    let swapped: [&[u8]; 2] = [&[10, 11, 12], &[7, 8, 9]];
    assert!(!BasicScheme::aggregate_verify(&pks, &swapped, &agg));
}

#[test]
fn test_basic_aggregate_of_three() {
    let sk1 = key_gen(&[0u8; 32]).unwrap();
    let sk2 = key_gen(&[1u8; 32]).unwrap();

    let sigs = [
        BasicScheme::sign(&sk1, &[1, 2, 3]).unwrap(),
        BasicScheme::sign(&sk1, &[1, 2, 3, 4]).unwrap(),
        BasicScheme::sign(&sk2, &[1, 2]).unwrap(),
    ];
    let agg = BasicScheme::aggregate(&sigs).unwrap();
    assert_eq!(agg.to_hex(), vectors::AGG_SIG2_HEX);

    let pks = [sk1.get_g1(), sk1.get_g1(), sk2.get_g1()];
    let messages: [&[u8]; 3] = [&[1, 2, 3], &[1, 2, 3, 4], &[1, 2]];
    assert!(BasicScheme::aggregate_verify(&pks, &messages, &agg));
}

#[test]
fn test_decoded_vectors_verify() {
    let pk = g1_from_hex(vectors::PK1_HEX);
    let sig = g2_from_hex(vectors::SIG1_HEX);
    assert!(BasicScheme::verify(&pk, &[7, 8, 9], &sig));
    assert!(!BasicScheme::verify(&pk, &[7, 8, 9, 0], &sig));
}

// ============================================================================
// Augmented Scheme
// ============================================================================

#[test]
fn test_aug_seed_vector_verifies() {
    let sk = key_gen(&vectors::AUG_SEED).unwrap();
    let pk = sk.get_g1();
    let message = [1u8, 2, 3, 4, 5];
    let sig = AugScheme::sign(&sk, &message).unwrap();

    let decoded = g2_from_hex(&sig.to_hex());
    assert!(AugScheme::verify(&pk, &message, &decoded));
    assert!(!BasicScheme::verify(&pk, &message, &decoded));
}

// ============================================================================
// Proof of Possession
// ============================================================================

#[test]
fn test_pop_proof_vector() {
    let sk = key_gen(&[4u8; 32]).unwrap();
    let proof = PopScheme::pop_prove(&sk).unwrap();
    assert_eq!(proof.to_hex(), vectors::POP_PROOF_HEX);
    assert!(PopScheme::pop_verify(&sk.get_g1(), &g2_from_hex(vectors::POP_PROOF_HEX)));
}

// ============================================================================
// Hashing
// ============================================================================

#[test]
fn test_hash_to_g2_vector() {
    let point = bls381_algorithms::ec::bls12_381::hash_to_g2(hash_to_g2::MSG, hash_to_g2::DST)
        .unwrap()
        .to_affine();
    let fq = |h: &str| Fq::from_hex(h).unwrap();
    assert_eq!(point.x, Fq2::from_pair(fq(hash_to_g2::X.0), fq(hash_to_g2::X.1)));
    assert_eq!(point.y, Fq2::from_pair(fq(hash_to_g2::Y.0), fq(hash_to_g2::Y.1)));
}

#[test]
fn test_expand_message_xmd_sha512_lengths() {
    let dst = b"QUUX-V01-CS02-with-expander-SHA512-256";
    let mut seen = std::collections::HashSet::new();
    for length in [16, 32, 64, 128, 255, 256, 1000, 4096, 8192] {
        let out = expand_message_xmd::<Sha512>(b"abc", dst, length).unwrap();
        assert_eq!(out.len(), length);
        assert!(seen.insert(out));
    }
}

// ============================================================================
// Point Encoding
// ============================================================================

#[test]
fn test_infinity_encoding_vector() {
    let mut bytes = [0u8; 48];
    bytes[0] = 0xc0;
    assert!(G1Point::from_bytes(&bytes).unwrap().is_infinity());

    for i in 1..48 {
        let mut bad = bytes;
        bad[i] = 1;
        assert!(G1Point::from_bytes(&bad).is_err());
    }
    let mut bad = bytes;
    bad[0] = 0xc1;
    assert!(G1Point::from_bytes(&bad).is_err());
}
