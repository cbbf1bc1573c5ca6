mod clock;
mod config;
mod delegation;
mod error;
mod events;
mod operator;
mod registry;
mod replay;
mod validator;


pub use clock::{Clock, FixedClock, SystemClock};
pub use config::RegistryConfig;
pub use delegation::{
    DelegationLedger, DelegationOracle, InMemoryDelegationLedger, InMemoryPodRegistry, PodRegistry,
};
pub use error::RegistryError;
pub use events::replay_events;
pub use operator::OperatorRegistry;
pub use registry::AvsRegistry;
pub use replay::{ReplayGuard, SignerId};
pub use validator::ValidatorRegistry;
