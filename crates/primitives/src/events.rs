use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use crate::registration::PodRef;

/// Lifecycle events, appended in commit order and consumed by off-chain
/// indexers. `ValidatorRegistered` carries the registering operator and the
/// resolved pod ref so the registries can be rebuilt from the log alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    OperatorRegistered {
        operator: Address,
        pod_owner: Address,
    },
    OperatorDeregistered {
        operator: Address,
    },
    ValidatorRegistered {
        operator: Address,
        pod_owner: Address,
        ecdsa_pubkey_hash: B256,
        bls_pubkey_hash: B256,
        custody_pod: PodRef,
    },
    ValidatorRevoked {
        operator: Address,
        bls_pubkey_hash: B256,
    },
}
