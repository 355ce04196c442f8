//! The basic, message-augmentation and proof-of-possession schemes

use std::collections::HashSet;

use bls381_algorithms::{G1Point, G2Point};
use bls381_api::{
    AggregateSignature, Error as ApiError, Result as ApiResult, Signature as SignatureTrait,
    SignatureDerive,
};
use bls381_params::bls12_381::schemes::{
    AUG_SCHEME_DST, BASIC_SCHEME_DST, KEYGEN_MIN_SEED_SIZE, POP_SCHEME_DST, POP_SCHEME_POP_DST,
};
use rand::{CryptoRng, RngCore};
use tracing::debug;

use super::operations::{core_aggregate, core_aggregate_verify, core_sign, core_verify};
use super::keys::{key_gen, PrivateKey};
use crate::error::{Error, Result};

/// Operations shared by every BLS scheme
///
/// Schemes override only the operations whose rules differ.
pub trait SignatureScheme {
    /// Scheme name used in diagnostics
    const NAME: &'static str;

    /// Domain separation tag for signatures
    const DST: &'static [u8];

    /// Sign `message`
    fn sign(sk: &PrivateKey, message: &[u8]) -> Result<G2Point> {
        core_sign(sk, message, Self::DST)
    }

    /// Verify a single signature
    fn verify(pk: &G1Point, message: &[u8], signature: &G2Point) -> bool {
        core_verify(pk, message, signature, Self::DST)
    }

    /// Combine signatures into one
    fn aggregate(signatures: &[G2Point]) -> Result<G2Point> {
        core_aggregate(signatures)
    }

    /// Verify an aggregate over `(pk_i, message_i)` pairs
    fn aggregate_verify(pks: &[G1Point], messages: &[&[u8]], signature: &G2Point) -> bool {
        core_aggregate_verify(pks, messages, signature, Self::DST)
    }
}

/// Basic scheme: aggregation is only sound over distinct messages
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicScheme;

impl SignatureScheme for BasicScheme {
    const NAME: &'static str = "BLS-Basic";
    const DST: &'static [u8] = BASIC_SCHEME_DST;

    fn aggregate_verify(pks: &[G1Point], messages: &[&[u8]], signature: &G2Point) -> bool {
        let distinct: HashSet<&[u8]> = messages.iter().copied().collect();
        if distinct.len() != messages.len() {
            debug!(scheme = Self::NAME, "rejecting repeated messages");
            return false;
        }
        core_aggregate_verify(pks, messages, signature, Self::DST)
    }
}

/// Message-augmentation scheme: messages are signed as `pk || message`
#[derive(Clone, Copy, Debug, Default)]
pub struct AugScheme;

impl AugScheme {
    /// Sign `prepend_pk || message`
    ///
    /// Used to build a signature that aggregates under another key, for
    /// example when `prepend_pk` is an aggregate public key.
    pub fn sign_prepend(sk: &PrivateKey, message: &[u8], prepend_pk: &G1Point) -> Result<G2Point> {
        core_sign(sk, &augment(prepend_pk, message), Self::DST)
    }
}

fn augment(pk: &G1Point, message: &[u8]) -> Vec<u8> {
    let mut augmented = pk.to_bytes();
    augmented.extend_from_slice(message);
    augmented
}

impl SignatureScheme for AugScheme {
    const NAME: &'static str = "BLS-Aug";
    const DST: &'static [u8] = AUG_SCHEME_DST;

    fn sign(sk: &PrivateKey, message: &[u8]) -> Result<G2Point> {
        Self::sign_prepend(sk, message, &sk.get_g1())
    }

    fn verify(pk: &G1Point, message: &[u8], signature: &G2Point) -> bool {
        core_verify(pk, &augment(pk, message), signature, Self::DST)
    }

    fn aggregate_verify(pks: &[G1Point], messages: &[&[u8]], signature: &G2Point) -> bool {
        if pks.len() != messages.len() {
            debug!(scheme = Self::NAME, "rejecting mismatched aggregate input");
            return false;
        }
        let augmented: Vec<Vec<u8>> = pks
            .iter()
            .zip(messages)
            .map(|(pk, message)| augment(pk, message))
            .collect();
        let augmented: Vec<&[u8]> = augmented.iter().map(Vec::as_slice).collect();
        core_aggregate_verify(pks, &augmented, signature, Self::DST)
    }
}

/// Proof-of-possession scheme
///
/// Once every signer has proven possession of their key, signatures on one
/// message can be checked against the sum of the public keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct PopScheme;

impl SignatureScheme for PopScheme {
    const NAME: &'static str = "BLS-PoP";
    const DST: &'static [u8] = POP_SCHEME_DST;
}

impl PopScheme {
    /// Sign the encoded public key under the proof-of-possession tag
    pub fn pop_prove(sk: &PrivateKey) -> Result<G2Point> {
        let pk = sk.get_g1();
        core_sign(sk, &pk.to_bytes(), POP_SCHEME_POP_DST)
    }

    /// Check a proof of possession for `pk`
    pub fn pop_verify(pk: &G1Point, proof: &G2Point) -> bool {
        core_verify(pk, &pk.to_bytes(), proof, POP_SCHEME_POP_DST)
    }

    /// Verify one message signed by every key in `pks`
    ///
    /// Sound only when each key has a verified proof of possession.
    pub fn fast_aggregate_verify(pks: &[G1Point], message: &[u8], signature: &G2Point) -> bool {
        if pks.is_empty() {
            debug!(scheme = Self::NAME, "rejecting empty key list");
            return false;
        }
        let aggregate: G1Point = pks.iter().sum();
        core_verify(&aggregate, message, signature, Self::DST)
    }
}

macro_rules! impl_api_traits {
    ($($scheme:ty),*) => {
        $(
            impl SignatureTrait for $scheme {
                type PublicKey = G1Point;
                type SecretKey = PrivateKey;
                type SignatureData = G2Point;
                type KeyPair = (G1Point, PrivateKey);

                fn name() -> &'static str {
                    <$scheme as SignatureScheme>::NAME
                }

                fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
                    let sk = PrivateKey::random(rng)?;
                    Ok((sk.get_g1(), sk))
                }

                fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
                    keypair.0.clone()
                }

                fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
                    keypair.1.clone()
                }

                fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
                    Ok(<$scheme as SignatureScheme>::sign(secret_key, message)?)
                }

                fn verify(
                    message: &[u8],
                    signature: &Self::SignatureData,
                    public_key: &Self::PublicKey,
                ) -> ApiResult<()> {
                    if <$scheme as SignatureScheme>::verify(public_key, message, signature) {
                        Ok(())
                    } else {
                        Err(verification_failed(<$scheme as SignatureScheme>::NAME))
                    }
                }
            }

            impl SignatureDerive for $scheme {
                const MIN_SEED_SIZE: usize = KEYGEN_MIN_SEED_SIZE;

                fn derive_keypair(seed: &[u8]) -> ApiResult<Self::KeyPair> {
                    let sk = key_gen(seed)?;
                    Ok((sk.get_g1(), sk))
                }

                fn derive_public_key(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
                    Ok(secret_key.get_g1())
                }
            }

            impl AggregateSignature for $scheme {
                fn aggregate_signatures(
                    signatures: &[Self::SignatureData],
                ) -> ApiResult<Self::SignatureData> {
                    Ok(<$scheme as SignatureScheme>::aggregate(signatures)?)
                }

                fn verify_aggregate(
                    public_keys: &[Self::PublicKey],
                    messages: &[&[u8]],
                    signature: &Self::SignatureData,
                ) -> ApiResult<()> {
                    if <$scheme as SignatureScheme>::aggregate_verify(public_keys, messages, signature) {
                        Ok(())
                    } else {
                        Err(verification_failed(<$scheme as SignatureScheme>::NAME))
                    }
                }
            }
        )*
    };
}

fn verification_failed(scheme: &'static str) -> ApiError {
    Error::Verification { scheme }.into()
}

impl_api_traits!(BasicScheme, AugScheme, PopScheme);
