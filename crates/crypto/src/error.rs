use alloy_primitives::{Address, U256};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlsError {
    #[error("coordinate is not a canonical bn254 field element")]
    NonCanonicalCoordinate,
    #[error("point is not on the bn254 curve")]
    NotOnCurve,
    #[error("g2 point is not in the prime-order subgroup")]
    NotInSubgroup,
    #[error("point at infinity cannot act as a key or signature")]
    IdentityPoint,
    #[error("proof of possession pairing check failed")]
    PairingCheckFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error(transparent)]
    Bls(#[from] BlsError),
    #[error("malformed ecdsa signature")]
    MalformedEcdsaSignature,
    #[error("signature recovered to {recovered}, expected {expected}")]
    SignerMismatch { expected: Address, recovered: Address },
    #[error("signature expired at {expiry}, current time is {now}")]
    Expired { expiry: U256, now: u64 },
}
