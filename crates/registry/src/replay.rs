use std::collections::HashSet;

use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Identity a salt is scoped to. Operator registrations burn salts against
/// the operator address, validator registrations against the BLS pubkey
/// hash, so the two surfaces never contend for the same entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignerId {
    Operator(Address),
    Validator(B256),
}

/// Tracks consumed `(signer, salt)` pairs. Entries are retained for the
/// lifetime of the system; there is no eviction path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayGuard {
    spent: HashSet<(SignerId, B256)>,
}

impl ReplayGuard {
    pub fn is_spent(&self, signer: SignerId, salt: B256) -> bool {
        self.spent.contains(&(signer, salt))
    }

    /// Consumes `(signer, salt)` if unspent, fails if already consumed.
    /// Callers order this after every other admission check so a rejected
    /// registration never burns the salt.
    pub fn check_and_consume(&mut self, signer: SignerId, salt: B256) -> Result<(), RegistryError> {
        if !self.spent.insert((signer, salt)) {
            return Err(RegistryError::SaltAlreadySpent { signer, salt });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.spent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumes_each_pair_at_most_once() {
        let mut guard = ReplayGuard::default();
        let signer = SignerId::Operator(Address::repeat_byte(0x01));
        let salt = B256::repeat_byte(0xaa);

        assert!(!guard.is_spent(signer, salt));
        guard.check_and_consume(signer, salt).expect("first use succeeds");
        assert!(guard.is_spent(signer, salt));

        let err = guard.check_and_consume(signer, salt).unwrap_err();
        assert_eq!(err, RegistryError::SaltAlreadySpent { signer, salt });
        assert_eq!(guard.len(), 1);
    }

    #[test]
    fn salts_are_scoped_per_signer() {
        let mut guard = ReplayGuard::default();
        let salt = B256::repeat_byte(0xaa);
        let operator = SignerId::Operator(Address::repeat_byte(0x01));
        let validator = SignerId::Validator(B256::repeat_byte(0x02));

        guard.check_and_consume(operator, salt).expect("operator salt unspent");
        guard.check_and_consume(validator, salt).expect("same salt, different signer");
        assert_eq!(guard.len(), 2);
    }
}
