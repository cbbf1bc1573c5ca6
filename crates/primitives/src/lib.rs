mod bn254;
mod events;
mod registration;

pub use bn254::{G1Point, G2Point, SignatureWithSaltAndExpiry};
pub use events::RegistryEvent;
pub use registration::{
    OperatorRecord, OperatorStatus, PodRef, ValidatorRecord, ValidatorRegistrationParams,
    ValidatorStatus,
};
