use std::collections::BTreeSet;

use alloy_primitives::{keccak256, Address, B256, U256};
use alloy_sol_types::SolValue;
use serde::{Deserialize, Serialize};

use crate::bn254::{G1Point, G2Point};

/// Opaque pointer to the custody pod proving a pod owner's
/// withdrawal-credential ownership. Resolved externally, never dereferenced
/// by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PodRef(Address);

impl PodRef {
    pub const fn new(pod: Address) -> Self {
        Self(pod)
    }

    pub const fn address(&self) -> Address {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatorStatus {
    #[default]
    Unregistered,
    Active,
    Deregistered,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatorStatus {
    #[default]
    Unregistered,
    Active,
    Revoked,
}

/// Registration record of one operator. `pod_owners` holds every pod owner
/// that registered through this operator during the current cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorRecord {
    pub operator: Address,
    pub pod_owners: BTreeSet<Address>,
    pub status: OperatorStatus,
}

impl OperatorRecord {
    pub fn new(operator: Address, pod_owner: Address) -> Self {
        Self {
            operator,
            pod_owners: BTreeSet::from([pod_owner]),
            status: OperatorStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == OperatorStatus::Active
    }
}

/// Registration record of one validator, keyed by `bls_pubkey_hash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorRecord {
    pub bls_pubkey_hash: B256,
    pub ecdsa_pubkey_hash: B256,
    pub operator: Address,
    pub pod_owner: Address,
    pub custody_pod: PodRef,
    pub status: ValidatorStatus,
}

impl ValidatorRecord {
    pub fn is_active(&self) -> bool {
        self.status == ValidatorStatus::Active
    }
}

/// Material submitted with a validator registration. The registration
/// signature is a BLS proof of possession over the challenge digest binding
/// the operator, the auxiliary key hash, the salt and the expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorRegistrationParams {
    pub registration_signature: G1Point,
    pub pubkey_g1: G1Point,
    pub pubkey_g2: G2Point,
    pub ecdsa_pubkey_hash: B256,
    pub salt: B256,
    pub expiry: U256,
}

impl ValidatorRegistrationParams {
    /// Primary unique key of the validator: keccak over the affine G1 pubkey.
    pub fn bls_pubkey_hash(&self) -> B256 {
        keccak256((self.pubkey_g1.x, self.pubkey_g1.y).abi_encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bls_pubkey_hash_binds_both_coordinates() {
        let params = ValidatorRegistrationParams {
            registration_signature: G1Point::default(),
            pubkey_g1: G1Point { x: U256::from(1), y: U256::from(2) },
            pubkey_g2: G2Point::default(),
            ecdsa_pubkey_hash: B256::ZERO,
            salt: B256::ZERO,
            expiry: U256::ZERO,
        };
        let mut swapped = params.clone();
        swapped.pubkey_g1 = G1Point { x: U256::from(2), y: U256::from(1) };

        assert_ne!(params.bls_pubkey_hash(), swapped.bls_pubkey_hash());
    }

    #[test]
    fn operator_record_starts_active_with_registering_pod_owner() {
        let operator = Address::repeat_byte(0x11);
        let pod_owner = Address::repeat_byte(0x22);
        let record = OperatorRecord::new(operator, pod_owner);

        assert!(record.is_active());
        assert!(record.pod_owners.contains(&pod_owner));
        assert_eq!(record.pod_owners.len(), 1);
    }

    #[test]
    fn validator_record_serde_round_trip() {
        let record = ValidatorRecord {
            bls_pubkey_hash: B256::repeat_byte(0xaa),
            ecdsa_pubkey_hash: B256::repeat_byte(0xbb),
            operator: Address::repeat_byte(0x11),
            pod_owner: Address::repeat_byte(0x22),
            custody_pod: PodRef::new(Address::repeat_byte(0x33)),
            status: ValidatorStatus::Active,
        };

        let json = serde_json::to_string(&record).expect("serialize");
        let decoded: ValidatorRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, record);
    }
}
