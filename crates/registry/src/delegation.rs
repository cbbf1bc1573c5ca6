use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use alloy_primitives::Address;
use kestrel_primitives::PodRef;
use parking_lot::RwLock;

use crate::error::RegistryError;

/// External delegation ledger: which operator a pod owner delegated to.
pub trait DelegationLedger: Send + Sync {
    fn is_delegated(&self, pod_owner: Address, operator: Address) -> bool;
}

/// External custody pod registry: which pod, if any, a pod owner controls.
pub trait PodRegistry: Send + Sync {
    fn pod_of(&self, pod_owner: Address) -> Option<PodRef>;
}

/// Read-only adapter over the external delegation ledger and custody pod
/// registry. Owns no state; both lookups are synchronous reads performed
/// inside the caller's transaction.
#[derive(Clone)]
pub struct DelegationOracle {
    ledger: Arc<dyn DelegationLedger>,
    pods: Arc<dyn PodRegistry>,
}

impl DelegationOracle {
    pub fn new(ledger: Arc<dyn DelegationLedger>, pods: Arc<dyn PodRegistry>) -> Self {
        Self { ledger, pods }
    }

    pub fn require_delegated(
        &self,
        pod_owner: Address,
        operator: Address,
    ) -> Result<(), RegistryError> {
        if self.ledger.is_delegated(pod_owner, operator) {
            Ok(())
        } else {
            Err(RegistryError::NotDelegatedToOperator { pod_owner, operator })
        }
    }

    pub fn resolve_pod(&self, pod_owner: Address) -> Result<PodRef, RegistryError> {
        self.pods.pod_of(pod_owner).ok_or(RegistryError::NoEigenPod(pod_owner))
    }
}

/// Ledger backed by a plain set, for local deployments and scenario tests.
#[derive(Debug, Default)]
pub struct InMemoryDelegationLedger {
    delegations: RwLock<HashSet<(Address, Address)>>,
}

impl InMemoryDelegationLedger {
    pub fn delegate(&self, pod_owner: Address, operator: Address) {
        self.delegations.write().insert((pod_owner, operator));
    }

    pub fn undelegate(&self, pod_owner: Address, operator: Address) {
        self.delegations.write().remove(&(pod_owner, operator));
    }
}

impl DelegationLedger for InMemoryDelegationLedger {
    fn is_delegated(&self, pod_owner: Address, operator: Address) -> bool {
        self.delegations.read().contains(&(pod_owner, operator))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPodRegistry {
    pods: RwLock<HashMap<Address, PodRef>>,
}

impl InMemoryPodRegistry {
    pub fn set_pod(&self, pod_owner: Address, pod: PodRef) {
        self.pods.write().insert(pod_owner, pod);
    }
}

impl PodRegistry for InMemoryPodRegistry {
    fn pod_of(&self, pod_owner: Address) -> Option<PodRef> {
        self.pods.read().get(&pod_owner).copied()
    }
}
