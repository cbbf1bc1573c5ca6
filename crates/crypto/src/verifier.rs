use alloy_primitives::{Address, B256};
use kestrel_primitives::{G1Point, G2Point};

use crate::{bls, ecdsa, error::SignatureError};

/// Seam between the admission state machine and the curve library. The
/// registry only ever talks to this trait, so scenario tests can inject
/// deterministic doubles.
pub trait SignatureVerifier: Send + Sync {
    fn verify_proof_of_possession(
        &self,
        pubkey_g1: &G1Point,
        pubkey_g2: &G2Point,
        signature: &G1Point,
        challenge: B256,
    ) -> Result<(), SignatureError>;

    fn verify_operator_signature(
        &self,
        signer: Address,
        digest: B256,
        signature: &[u8],
    ) -> Result<(), SignatureError>;
}

/// Production verifier backed by BN254 pairing arithmetic.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bn254Verifier;

impl SignatureVerifier for Bn254Verifier {
    fn verify_proof_of_possession(
        &self,
        pubkey_g1: &G1Point,
        pubkey_g2: &G2Point,
        signature: &G1Point,
        challenge: B256,
    ) -> Result<(), SignatureError> {
        bls::verify_proof_of_possession(pubkey_g1, pubkey_g2, signature, challenge)?;
        Ok(())
    }

    fn verify_operator_signature(
        &self,
        signer: Address,
        digest: B256,
        signature: &[u8],
    ) -> Result<(), SignatureError> {
        ecdsa::verify_operator_signature(signer, digest, signature)
    }
}
