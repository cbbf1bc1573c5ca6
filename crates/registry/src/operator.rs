use std::collections::HashMap;

use alloy_primitives::Address;
use kestrel_primitives::{OperatorRecord, OperatorStatus};

use crate::error::RegistryError;

/// Sole owner of operator records, keyed by operator address. Absence from
/// the map reads as `Unregistered`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorRegistry {
    operators: HashMap<Address, OperatorRecord>,
}

impl OperatorRegistry {
    pub fn get(&self, operator: Address) -> Option<&OperatorRecord> {
        self.operators.get(&operator)
    }

    pub fn status(&self, operator: Address) -> OperatorStatus {
        self.operators.get(&operator).map(|record| record.status).unwrap_or_default()
    }

    pub fn require_active(&self, operator: Address) -> Result<&OperatorRecord, RegistryError> {
        self.operators
            .get(&operator)
            .filter(|record| record.is_active())
            .ok_or(RegistryError::NotOperator(operator))
    }

    /// Only an Active record blocks registration: a deregistered operator
    /// may start a fresh cycle.
    pub fn ensure_can_register(&self, operator: Address) -> Result<(), RegistryError> {
        match self.status(operator) {
            OperatorStatus::Active => Err(RegistryError::OperatorAlreadyRegistered(operator)),
            OperatorStatus::Unregistered | OperatorStatus::Deregistered => Ok(()),
        }
    }

    /// Starts a registration cycle. Replaces any previous (deregistered)
    /// record, resetting the pod-owner set.
    pub(crate) fn insert_active(&mut self, operator: Address, pod_owner: Address) {
        self.operators.insert(operator, OperatorRecord::new(operator, pod_owner));
    }

    pub(crate) fn link_pod_owner(
        &mut self,
        operator: Address,
        pod_owner: Address,
    ) -> Result<(), RegistryError> {
        let record = self
            .operators
            .get_mut(&operator)
            .filter(|record| record.is_active())
            .ok_or(RegistryError::NotOperator(operator))?;
        record.pod_owners.insert(pod_owner);
        Ok(())
    }

    pub(crate) fn set_deregistered(&mut self, operator: Address) -> Result<(), RegistryError> {
        let record = self
            .operators
            .get_mut(&operator)
            .filter(|record| record.is_active())
            .ok_or(RegistryError::NotOperator(operator))?;
        record.status = OperatorStatus::Deregistered;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPERATOR: Address = Address::repeat_byte(0x11);
    const POD_OWNER: Address = Address::repeat_byte(0x22);

    #[test]
    fn lifecycle_transitions() {
        let mut registry = OperatorRegistry::default();
        assert_eq!(registry.status(OPERATOR), OperatorStatus::Unregistered);
        assert!(registry.require_active(OPERATOR).is_err());

        registry.ensure_can_register(OPERATOR).expect("unregistered may register");
        registry.insert_active(OPERATOR, POD_OWNER);
        assert_eq!(registry.status(OPERATOR), OperatorStatus::Active);
        assert_eq!(
            registry.ensure_can_register(OPERATOR).unwrap_err(),
            RegistryError::OperatorAlreadyRegistered(OPERATOR)
        );

        registry.set_deregistered(OPERATOR).expect("active may deregister");
        assert_eq!(registry.status(OPERATOR), OperatorStatus::Deregistered);
        registry.ensure_can_register(OPERATOR).expect("deregistered may re-register");
    }

    #[test]
    fn deregistering_twice_fails() {
        let mut registry = OperatorRegistry::default();
        registry.insert_active(OPERATOR, POD_OWNER);
        registry.set_deregistered(OPERATOR).expect("first deregistration");
        assert_eq!(
            registry.set_deregistered(OPERATOR).unwrap_err(),
            RegistryError::NotOperator(OPERATOR)
        );
    }

    #[test]
    fn reregistration_resets_pod_owners() {
        let mut registry = OperatorRegistry::default();
        registry.insert_active(OPERATOR, POD_OWNER);
        registry.link_pod_owner(OPERATOR, Address::repeat_byte(0x33)).expect("active operator");
        assert_eq!(registry.get(OPERATOR).expect("registered").pod_owners.len(), 2);

        registry.set_deregistered(OPERATOR).expect("active may deregister");
        registry.insert_active(OPERATOR, POD_OWNER);
        assert_eq!(registry.get(OPERATOR).expect("registered").pod_owners.len(), 1);
    }
}
