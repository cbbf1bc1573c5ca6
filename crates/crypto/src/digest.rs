use alloy_primitives::{keccak256, Address, B256, U256};
use alloy_sol_types::SolValue;

const DOMAIN_NAME: &[u8] = b"Kestrel";

const DOMAIN_TYPE: &[u8] =
    b"EIP712Domain(string name,uint256 chainId,address verifyingContract)";

const OPERATOR_REGISTRATION_TYPE: &[u8] =
    b"OperatorRegistration(address operator,address avs,bytes32 salt,uint256 expiry)";

const VALIDATOR_REGISTRATION_TYPE: &[u8] =
    b"ValidatorRegistration(address operator,bytes32 ecdsaPubKeyHash,bytes32 salt,uint256 expiry)";

fn domain_separator(avs: Address, chain_id: u64) -> B256 {
    keccak256(
        (keccak256(DOMAIN_TYPE), keccak256(DOMAIN_NAME), U256::from(chain_id), avs).abi_encode(),
    )
}

fn eip712_digest(domain_separator: B256, struct_hash: B256) -> B256 {
    let mut preimage = Vec::with_capacity(66);
    preimage.extend_from_slice(&[0x19, 0x01]);
    preimage.extend_from_slice(domain_separator.as_slice());
    preimage.extend_from_slice(struct_hash.as_slice());
    keccak256(preimage)
}

/// Digest an operator signs to authorize its AVS registration.
pub fn operator_registration_digest(
    avs: Address,
    chain_id: u64,
    operator: Address,
    salt: B256,
    expiry: U256,
) -> B256 {
    let struct_hash = keccak256(
        (keccak256(OPERATOR_REGISTRATION_TYPE), operator, avs, salt, expiry).abi_encode(),
    );
    eip712_digest(domain_separator(avs, chain_id), struct_hash)
}

/// Challenge digest a validator key signs to prove possession. Binds the
/// registering operator, the auxiliary key hash, the salt and the expiry to
/// the AVS domain, so the proof cannot be replayed across contexts.
pub fn validator_registration_digest(
    avs: Address,
    chain_id: u64,
    operator: Address,
    ecdsa_pubkey_hash: B256,
    salt: B256,
    expiry: U256,
) -> B256 {
    let struct_hash = keccak256(
        (keccak256(VALIDATOR_REGISTRATION_TYPE), operator, ecdsa_pubkey_hash, salt, expiry)
            .abi_encode(),
    );
    eip712_digest(domain_separator(avs, chain_id), struct_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AVS: Address = Address::repeat_byte(0xa1);
    const OPERATOR: Address = Address::repeat_byte(0xb2);
    const CHAIN_ID: u64 = 17000;

    #[test]
    fn operator_digest_is_deterministic() {
        let salt = B256::repeat_byte(0x01);
        let expiry = U256::from(1_700_000_000u64);
        let a = operator_registration_digest(AVS, CHAIN_ID, OPERATOR, salt, expiry);
        let b = operator_registration_digest(AVS, CHAIN_ID, OPERATOR, salt, expiry);
        assert_eq!(a, b);
    }

    #[test]
    fn operator_digest_binds_every_field() {
        let salt = B256::repeat_byte(0x01);
        let expiry = U256::from(1_700_000_000u64);
        let base = operator_registration_digest(AVS, CHAIN_ID, OPERATOR, salt, expiry);

        assert_ne!(
            base,
            operator_registration_digest(Address::repeat_byte(0xa2), CHAIN_ID, OPERATOR, salt, expiry)
        );
        assert_ne!(base, operator_registration_digest(AVS, CHAIN_ID + 1, OPERATOR, salt, expiry));
        assert_ne!(
            base,
            operator_registration_digest(AVS, CHAIN_ID, Address::repeat_byte(0xb3), salt, expiry)
        );
        assert_ne!(
            base,
            operator_registration_digest(AVS, CHAIN_ID, OPERATOR, B256::repeat_byte(0x02), expiry)
        );
        assert_ne!(
            base,
            operator_registration_digest(AVS, CHAIN_ID, OPERATOR, salt, expiry + U256::from(1))
        );
    }

    #[test]
    fn validator_digest_binds_the_auxiliary_key() {
        let salt = B256::repeat_byte(0x01);
        let expiry = U256::from(1_700_000_000u64);
        let a = validator_registration_digest(
            AVS,
            CHAIN_ID,
            OPERATOR,
            B256::repeat_byte(0xcc),
            salt,
            expiry,
        );
        let b = validator_registration_digest(
            AVS,
            CHAIN_ID,
            OPERATOR,
            B256::repeat_byte(0xcd),
            salt,
            expiry,
        );
        assert_ne!(a, b);
    }

    #[test]
    fn operator_and_validator_digests_never_collide() {
        let salt = B256::repeat_byte(0x01);
        let expiry = U256::from(1_700_000_000u64);
        let operator = operator_registration_digest(AVS, CHAIN_ID, OPERATOR, salt, expiry);
        let validator =
            validator_registration_digest(AVS, CHAIN_ID, OPERATOR, B256::ZERO, salt, expiry);
        assert_ne!(operator, validator);
    }
}
