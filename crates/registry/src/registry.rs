use std::sync::Arc;

use alloy_primitives::{Address, B256, U256};
use kestrel_crypto::{digest, Bn254Verifier, SignatureError, SignatureVerifier};
use kestrel_primitives::{
    OperatorRecord, OperatorStatus, RegistryEvent, SignatureWithSaltAndExpiry, ValidatorRecord,
    ValidatorRegistrationParams, ValidatorStatus,
};
use parking_lot::RwLock;
use tracing::info;

use crate::{
    clock::{Clock, SystemClock},
    config::RegistryConfig,
    delegation::DelegationOracle,
    error::RegistryError,
    operator::OperatorRegistry,
    replay::{ReplayGuard, SignerId},
    validator::ValidatorRegistry,
};

#[derive(Debug, Default)]
struct RegistryState {
    operators: OperatorRegistry,
    validators: ValidatorRegistry,
    replay: ReplayGuard,
    events: Vec<RegistryEvent>,
}

/// Admission orchestrator. Every public operation runs as one serialized
/// transaction against the combined operator/validator/replay state: the
/// write lock is taken once, every check runs against that view, and
/// mutation happens only after the last check passes. A failed call leaves
/// the state untouched, including the replay guard.
pub struct AvsRegistry {
    config: RegistryConfig,
    oracle: DelegationOracle,
    verifier: Arc<dyn SignatureVerifier>,
    clock: Arc<dyn Clock>,
    state: RwLock<RegistryState>,
}

impl AvsRegistry {
    pub fn new(config: RegistryConfig, oracle: DelegationOracle) -> Self {
        Self::with_parts(config, oracle, Arc::new(Bn254Verifier), Arc::new(SystemClock))
    }

    pub fn with_parts(
        config: RegistryConfig,
        oracle: DelegationOracle,
        verifier: Arc<dyn SignatureVerifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { config, oracle, verifier, clock, state: RwLock::new(RegistryState::default()) }
    }

    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    /// Admits an operator on behalf of a delegating pod owner. The operator
    /// signature authorizes registration into this AVS and burns its salt.
    pub fn register_operator(
        &self,
        operator: Address,
        pod_owner: Address,
        operator_sig: &SignatureWithSaltAndExpiry,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.write();

        state.operators.ensure_can_register(operator)?;
        self.oracle.require_delegated(pod_owner, operator)?;
        self.check_expiry(operator_sig.expiry)?;
        let digest = digest::operator_registration_digest(
            self.config.avs,
            self.config.chain_id,
            operator,
            operator_sig.salt,
            operator_sig.expiry,
        );
        self.verifier.verify_operator_signature(operator, digest, &operator_sig.signature)?;

        state.replay.check_and_consume(SignerId::Operator(operator), operator_sig.salt)?;
        state.operators.insert_active(operator, pod_owner);
        state.events.push(RegistryEvent::OperatorRegistered { operator, pod_owner });
        info!(%operator, %pod_owner, "operator registered");
        Ok(())
    }

    /// Admits a validator under the calling operator. Check order: custody
    /// pod, delegation, key uniqueness, proof of possession, replay; only
    /// then is the record committed.
    pub fn register_validator(
        &self,
        operator: Address,
        pod_owner: Address,
        params: &ValidatorRegistrationParams,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.write();

        state.operators.require_active(operator)?;
        let custody_pod = self.oracle.resolve_pod(pod_owner)?;
        self.oracle.require_delegated(pod_owner, operator)?;
        let bls_pubkey_hash = params.bls_pubkey_hash();
        state.validators.ensure_unique(bls_pubkey_hash)?;
        self.check_expiry(params.expiry)?;
        let challenge = digest::validator_registration_digest(
            self.config.avs,
            self.config.chain_id,
            operator,
            params.ecdsa_pubkey_hash,
            params.salt,
            params.expiry,
        );
        self.verifier.verify_proof_of_possession(
            &params.pubkey_g1,
            &params.pubkey_g2,
            &params.registration_signature,
            challenge,
        )?;

        state.replay.check_and_consume(SignerId::Validator(bls_pubkey_hash), params.salt)?;
        state.operators.link_pod_owner(operator, pod_owner)?;
        state.validators.insert_active(ValidatorRecord {
            bls_pubkey_hash,
            ecdsa_pubkey_hash: params.ecdsa_pubkey_hash,
            operator,
            pod_owner,
            custody_pod,
            status: ValidatorStatus::Active,
        });
        state.events.push(RegistryEvent::ValidatorRegistered {
            operator,
            pod_owner,
            ecdsa_pubkey_hash: params.ecdsa_pubkey_hash,
            bls_pubkey_hash,
            custody_pod,
        });
        info!(%operator, %pod_owner, %bls_pubkey_hash, "validator registered");
        Ok(())
    }

    /// Removes the calling operator. Its validators stay Active: slashing
    /// and exit are governed by the external custody system, not this
    /// registry.
    pub fn deregister_operator(&self, operator: Address) -> Result<(), RegistryError> {
        let mut state = self.state.write();

        state.operators.set_deregistered(operator)?;
        state.events.push(RegistryEvent::OperatorDeregistered { operator });
        info!(%operator, "operator deregistered");
        Ok(())
    }

    /// Revokes an Active validator. Only the operator that registered the
    /// key may revoke it; the key may later re-register with a fresh salt.
    pub fn revoke_validator(
        &self,
        operator: Address,
        bls_pubkey_hash: B256,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.write();

        state.operators.require_active(operator)?;
        state.validators.set_revoked(bls_pubkey_hash, operator)?;
        state.events.push(RegistryEvent::ValidatorRevoked { operator, bls_pubkey_hash });
        info!(%operator, %bls_pubkey_hash, "validator revoked");
        Ok(())
    }

    pub fn operator_record(&self, operator: Address) -> Option<OperatorRecord> {
        self.state.read().operators.get(operator).cloned()
    }

    pub fn operator_status(&self, operator: Address) -> OperatorStatus {
        self.state.read().operators.status(operator)
    }

    pub fn validator_record(&self, bls_pubkey_hash: B256) -> Option<ValidatorRecord> {
        self.state.read().validators.get(bls_pubkey_hash).cloned()
    }

    pub fn validator_status(&self, bls_pubkey_hash: B256) -> ValidatorStatus {
        self.state.read().validators.status(bls_pubkey_hash)
    }

    pub fn salt_is_spent(&self, signer: SignerId, salt: B256) -> bool {
        self.state.read().replay.is_spent(signer, salt)
    }

    /// Cloned snapshot of both registries, taken under one read lock.
    pub fn registries(&self) -> (OperatorRegistry, ValidatorRegistry) {
        let state = self.state.read();
        (state.operators.clone(), state.validators.clone())
    }

    pub fn events(&self) -> Vec<RegistryEvent> {
        self.state.read().events.clone()
    }

    fn check_expiry(&self, expiry: U256) -> Result<(), RegistryError> {
        let now = self.clock.now();
        if expiry < U256::from(now) {
            return Err(SignatureError::Expired { expiry, now }.into());
        }
        Ok(())
    }
}
