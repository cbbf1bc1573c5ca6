use std::collections::HashMap;

use alloy_primitives::{Address, B256};
use kestrel_primitives::{ValidatorRecord, ValidatorStatus};

use crate::error::RegistryError;

/// Sole owner of validator records, keyed by the globally unique BLS pubkey
/// hash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorRegistry {
    validators: HashMap<B256, ValidatorRecord>,
}

impl ValidatorRegistry {
    pub fn get(&self, bls_pubkey_hash: B256) -> Option<&ValidatorRecord> {
        self.validators.get(&bls_pubkey_hash)
    }

    pub fn status(&self, bls_pubkey_hash: B256) -> ValidatorStatus {
        self.validators.get(&bls_pubkey_hash).map(|record| record.status).unwrap_or_default()
    }

    /// An Active record blocks registration under any operator; a revoked
    /// key may re-enter with fresh material.
    pub fn ensure_unique(&self, bls_pubkey_hash: B256) -> Result<(), RegistryError> {
        match self.status(bls_pubkey_hash) {
            ValidatorStatus::Active => {
                Err(RegistryError::ValidatorAlreadyRegistered(bls_pubkey_hash))
            }
            ValidatorStatus::Unregistered | ValidatorStatus::Revoked => Ok(()),
        }
    }

    pub(crate) fn insert_active(&mut self, record: ValidatorRecord) {
        self.validators.insert(record.bls_pubkey_hash, record);
    }

    /// Revocation is restricted to the operator that registered the key.
    pub(crate) fn set_revoked(
        &mut self,
        bls_pubkey_hash: B256,
        operator: Address,
    ) -> Result<(), RegistryError> {
        let record = self
            .validators
            .get_mut(&bls_pubkey_hash)
            .filter(|record| record.is_active())
            .ok_or(RegistryError::ValidatorNotRegistered(bls_pubkey_hash))?;
        if record.operator != operator {
            return Err(RegistryError::NotOperator(operator));
        }
        record.status = ValidatorStatus::Revoked;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}
