use alloy_primitives::{Address, PrimitiveSignature, B256};

use crate::error::SignatureError;

/// Verifies the operator's 65-byte ECDSA signature over `digest` by address
/// recovery. Fails closed on any parse or recovery error.
pub fn verify_operator_signature(
    signer: Address,
    digest: B256,
    signature: &[u8],
) -> Result<(), SignatureError> {
    let signature = PrimitiveSignature::try_from(signature)
        .map_err(|_| SignatureError::MalformedEcdsaSignature)?;
    let recovered = signature
        .recover_address_from_prehash(&digest)
        .map_err(|_| SignatureError::MalformedEcdsaSignature)?;
    if recovered != signer {
        return Err(SignatureError::SignerMismatch { expected: signer, recovered });
    }
    Ok(())
}
