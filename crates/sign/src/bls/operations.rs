//! Core BLS operations, parameterised by a domain separation tag
//!
//! Every scheme reduces to these four functions. Verification failures are
//! reported as `false`; only malformed inputs to signing and aggregation are
//! errors.

use bls381_algorithms::ec::bls12_381::{ate_pairing_multi, hash_to_g2};
use bls381_algorithms::{g1_generator, Field, Fq12, G1Point, G2Point};
use tracing::{debug, instrument};

use super::keys::PrivateKey;
use crate::error::{Error, Result};

/// `G2Map(message, dst) * sk`
#[instrument(level = "debug", skip_all, fields(msg_len = message.len()))]
pub fn core_sign(sk: &PrivateKey, message: &[u8], dst: &[u8]) -> Result<G2Point> {
    let point = hash_to_g2(message, dst)?;
    Ok(point.multiply(&sk.scalar()))
}

/// Check `e(pk, G2Map(message, dst)) == e(G1, signature)`
#[instrument(level = "debug", skip_all, fields(msg_len = message.len()))]
pub fn core_verify(pk: &G1Point, message: &[u8], signature: &G2Point, dst: &[u8]) -> bool {
    if pk.is_infinity() {
        debug!("rejecting public key at infinity");
        return false;
    }
    if !pk.is_valid() || !signature.is_valid() {
        debug!("rejecting point outside the prime-order subgroup");
        return false;
    }

    let hashed = match hash_to_g2(message, dst) {
        Ok(point) => point,
        Err(err) => {
            debug!(%err, "hash to G2 failed");
            return false;
        }
    };

    let ps = [pk.clone(), g1_generator().negate()];
    let qs = [hashed, signature.clone()];
    pairing_product_is_one(&ps, &qs)
}

/// Sum of the signatures
pub fn core_aggregate(signatures: &[G2Point]) -> Result<G2Point> {
    if signatures.is_empty() {
        return Err(Error::EmptyAggregate("signatures"));
    }
    Ok(signatures.iter().sum())
}

/// Check `e(G1, signature) == prod e(pk_i, G2Map(message_i, dst))`
#[instrument(level = "debug", skip_all, fields(pairs = pks.len()))]
pub fn core_aggregate_verify(
    pks: &[G1Point],
    messages: &[&[u8]],
    signature: &G2Point,
    dst: &[u8],
) -> bool {
    if pks.len() != messages.len() || pks.is_empty() {
        debug!(
            pks = pks.len(),
            messages = messages.len(),
            "rejecting mismatched or empty aggregate input"
        );
        return false;
    }
    if !signature.is_valid() {
        debug!("rejecting aggregate signature outside the subgroup");
        return false;
    }

    let mut ps = Vec::with_capacity(pks.len() + 1);
    let mut qs = Vec::with_capacity(pks.len() + 1);
    ps.push(g1_generator().negate());
    qs.push(signature.clone());

    for (pk, message) in pks.iter().zip(messages) {
        if !pk.is_valid() {
            debug!("rejecting public key outside the subgroup");
            return false;
        }
        match hash_to_g2(message, dst) {
            Ok(point) => qs.push(point),
            Err(err) => {
                debug!(%err, "hash to G2 failed");
                return false;
            }
        }
        ps.push(pk.clone());
    }

    pairing_product_is_one(&ps, &qs)
}

fn pairing_product_is_one(ps: &[G1Point], qs: &[G2Point]) -> bool {
    match ate_pairing_multi(ps, qs) {
        Ok(product) => product == Fq12::one(),
        Err(err) => {
            debug!(%err, "multi-pairing failed");
            false
        }
    }
}
