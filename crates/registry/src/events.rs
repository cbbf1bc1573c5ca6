use kestrel_primitives::{RegistryEvent, ValidatorRecord, ValidatorStatus};

use crate::{error::RegistryError, operator::OperatorRegistry, validator::ValidatorRegistry};

/// Rebuilds both registries from an ordered event log. A log produced by a
/// live registry always replays cleanly; an error means the log was
/// truncated or reordered.
pub fn replay_events(
    events: &[RegistryEvent],
) -> Result<(OperatorRegistry, ValidatorRegistry), RegistryError> {
    let mut operators = OperatorRegistry::default();
    let mut validators = ValidatorRegistry::default();

    for event in events {
        match event {
            RegistryEvent::OperatorRegistered { operator, pod_owner } => {
                operators.ensure_can_register(*operator)?;
                operators.insert_active(*operator, *pod_owner);
            }
            RegistryEvent::OperatorDeregistered { operator } => {
                operators.set_deregistered(*operator)?;
            }
            RegistryEvent::ValidatorRegistered {
                operator,
                pod_owner,
                ecdsa_pubkey_hash,
                bls_pubkey_hash,
                custody_pod,
            } => {
                validators.ensure_unique(*bls_pubkey_hash)?;
                validators.insert_active(ValidatorRecord {
                    bls_pubkey_hash: *bls_pubkey_hash,
                    ecdsa_pubkey_hash: *ecdsa_pubkey_hash,
                    operator: *operator,
                    pod_owner: *pod_owner,
                    custody_pod: *custody_pod,
                    status: ValidatorStatus::Active,
                });
                operators.link_pod_owner(*operator, *pod_owner)?;
            }
            RegistryEvent::ValidatorRevoked { operator, bls_pubkey_hash } => {
                validators.set_revoked(*bls_pubkey_hash, *operator)?;
            }
        }
    }

    Ok((operators, validators))
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, B256};

    use super::*;

    #[test]
    fn replay_rejects_a_reordered_log() {
        let events = [RegistryEvent::OperatorDeregistered { operator: Address::repeat_byte(0x01) }];
        assert_eq!(
            replay_events(&events).unwrap_err(),
            RegistryError::NotOperator(Address::repeat_byte(0x01))
        );
    }

    #[test]
    fn replay_rejects_a_validator_without_its_operator() {
        let events = [RegistryEvent::ValidatorRevoked {
            operator: Address::repeat_byte(0x01),
            bls_pubkey_hash: B256::repeat_byte(0xaa),
        }];
        assert_eq!(
            replay_events(&events).unwrap_err(),
            RegistryError::ValidatorNotRegistered(B256::repeat_byte(0xaa))
        );
    }
}
