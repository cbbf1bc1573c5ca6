use alloy_primitives::{B256, U256};
use ark_bn254::{Fq, Fq2, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_ff::{BigInteger256, Field, One, PrimeField};
use kestrel_primitives::{G1Point, G2Point};

use crate::error::BlsError;

fn fq_from_u256(value: U256) -> Result<Fq, BlsError> {
    Fq::from_bigint(BigInteger256::new(value.into_limbs()))
        .ok_or(BlsError::NonCanonicalCoordinate)
}

fn u256_from_fq(value: Fq) -> U256 {
    U256::from_limbs(value.into_bigint().0)
}

/// Decodes and validates an affine G1 point. The point at infinity and
/// off-curve points are rejected; the G1 cofactor is one, so on-curve
/// implies the prime-order subgroup.
pub fn decode_g1(point: &G1Point) -> Result<G1Affine, BlsError> {
    if point.x.is_zero() && point.y.is_zero() {
        return Err(BlsError::IdentityPoint);
    }
    let affine = G1Affine::new_unchecked(fq_from_u256(point.x)?, fq_from_u256(point.y)?);
    if !affine.is_on_curve() {
        return Err(BlsError::NotOnCurve);
    }
    Ok(affine)
}

/// Decodes and validates an affine G2 point. On top of the G1 checks, the
/// G2 cofactor is non-trivial and a subgroup check is mandatory before any
/// pairing.
pub fn decode_g2(point: &G2Point) -> Result<G2Affine, BlsError> {
    if point.x.iter().all(U256::is_zero) && point.y.iter().all(U256::is_zero) {
        return Err(BlsError::IdentityPoint);
    }
    // precompile limb order: x = [c1, c0], y = [c1, c0]
    let x = Fq2::new(fq_from_u256(point.x[1])?, fq_from_u256(point.x[0])?);
    let y = Fq2::new(fq_from_u256(point.y[1])?, fq_from_u256(point.y[0])?);
    let affine = G2Affine::new_unchecked(x, y);
    if !affine.is_on_curve() {
        return Err(BlsError::NotOnCurve);
    }
    if !affine.is_in_correct_subgroup_assuming_on_curve() {
        return Err(BlsError::NotInSubgroup);
    }
    Ok(affine)
}

pub fn encode_g1(point: G1Affine) -> G1Point {
    if point.is_zero() {
        return G1Point::default();
    }
    G1Point { x: u256_from_fq(point.x), y: u256_from_fq(point.y) }
}

pub fn encode_g2(point: G2Affine) -> G2Point {
    if point.is_zero() {
        return G2Point::default();
    }
    G2Point {
        x: [u256_from_fq(point.x.c1), u256_from_fq(point.x.c0)],
        y: [u256_from_fq(point.y.c1), u256_from_fq(point.y.c0)],
    }
}

/// Maps a digest onto G1 by try-and-increment: x starts at the digest
/// reduced into the field and walks forward until x^3 + 3 is a square.
pub fn hash_to_g1(digest: B256) -> G1Affine {
    let mut x = Fq::from_be_bytes_mod_order(digest.as_slice());
    loop {
        let beta = x * x * x + Fq::from(3u64);
        if let Some(y) = beta.sqrt() {
            return G1Affine::new_unchecked(x, y);
        }
        x += Fq::one();
    }
}
