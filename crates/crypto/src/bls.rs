use alloy_primitives::{keccak256, B256};
use alloy_sol_types::SolValue;
use ark_bn254::{Bn254, Fr, G1Projective, G2Affine, G2Projective};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup, Group};
use ark_ff::{One, PrimeField};
use kestrel_primitives::{G1Point, G2Point};

use crate::{
    bn254::{decode_g1, decode_g2, encode_g1, encode_g2, hash_to_g1},
    error::BlsError,
};

/// BN254 key pair for producing registration material. Verification never
/// touches secrets; this type exists for operator tooling and tests.
#[derive(Debug, Clone)]
pub struct BlsKeyPair {
    secret: Fr,
}

impl BlsKeyPair {
    /// Builds a key pair from raw bytes, reduced into the scalar field.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        Self { secret: Fr::from_be_bytes_mod_order(bytes) }
    }

    pub fn pubkey_g1(&self) -> G1Point {
        encode_g1((G1Projective::generator() * self.secret).into_affine())
    }

    pub fn pubkey_g2(&self) -> G2Point {
        encode_g2((G2Projective::generator() * self.secret).into_affine())
    }

    /// Signs a challenge digest: sk * H(m).
    pub fn sign(&self, challenge: B256) -> G1Point {
        let message = hash_to_g1(challenge);
        encode_g1((message.into_group() * self.secret).into_affine())
    }
}

/// Verifies a BLS proof of possession over `challenge`.
///
/// A single folded pairing equation proves both claims at once:
///
///   e(sig + gamma * pk1, -G2) * e(H(m) + gamma * G1, pk2) == 1
///
/// which holds iff sig = sk * H(m) and pk1, pk2 share the secret sk. The
/// fold scalar gamma is derived from every input, so the two claims cannot
/// be satisfied independently.
pub fn verify_proof_of_possession(
    pubkey_g1: &G1Point,
    pubkey_g2: &G2Point,
    signature: &G1Point,
    challenge: B256,
) -> Result<(), BlsError> {
    let pk1 = decode_g1(pubkey_g1)?;
    let pk2 = decode_g2(pubkey_g2)?;
    let sig = decode_g1(signature)?;
    let message = hash_to_g1(challenge);

    let gamma = fold_scalar(signature, pubkey_g1, pubkey_g2, &encode_g1(message));
    let folded_sig = (pk1.into_group() * gamma + sig.into_group()).into_affine();
    let folded_msg = (G1Projective::generator() * gamma + message.into_group()).into_affine();

    let product =
        Bn254::multi_pairing([folded_sig, folded_msg], [-G2Affine::generator(), pk2]);
    if product.0.is_one() {
        Ok(())
    } else {
        Err(BlsError::PairingCheckFailed)
    }
}

fn fold_scalar(sig: &G1Point, pk1: &G1Point, pk2: &G2Point, message: &G1Point) -> Fr {
    let preimage = (
        sig.x, sig.y, pk1.x, pk1.y, pk2.x[0], pk2.x[1], pk2.y[0], pk2.y[1], message.x, message.y,
    )
        .abi_encode();
    Fr::from_be_bytes_mod_order(keccak256(preimage).as_slice())
}
