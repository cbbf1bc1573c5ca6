use alloy_primitives::{Address, B256};
use kestrel_crypto::SignatureError;
use thiserror::Error;

use crate::replay::SignerId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("caller {0} is not an active operator")]
    NotOperator(Address),
    #[error("pod owner {0} has no custody pod")]
    NoEigenPod(Address),
    #[error("pod owner {pod_owner} is not delegated to operator {operator}")]
    NotDelegatedToOperator { pod_owner: Address, operator: Address },
    #[error("invalid signature: {0}")]
    InvalidSignature(#[from] SignatureError),
    #[error("validator {0} is already registered")]
    ValidatorAlreadyRegistered(B256),
    #[error("operator {0} is already registered")]
    OperatorAlreadyRegistered(Address),
    #[error("validator {0} is not registered")]
    ValidatorNotRegistered(B256),
    #[error("salt {salt} already spent by signer {signer:?}")]
    SaltAlreadySpent { signer: SignerId, salt: B256 },
}
