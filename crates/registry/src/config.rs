use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Identity of the AVS this registry admits into. Both fields are folded
/// into every signing digest, separating registrations across AVS instances
/// and chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub avs: Address,
    pub chain_id: u64,
}

impl RegistryConfig {
    pub const fn new(avs: Address, chain_id: u64) -> Self {
        Self { avs, chain_id }
    }
}
