pub mod bls;
pub mod bn254;
pub mod digest;
mod ecdsa;
mod error;
mod verifier;

pub use ecdsa::verify_operator_signature;
pub use error::{BlsError, SignatureError};
pub use verifier::{Bn254Verifier, SignatureVerifier};
