//! # mote-types
//!
//! Shared types, error types, and physical constants for the Mote
//! particle simulation engine.
//!
//! No domain logic lives here — this crate defines the vocabulary
//! the rest of the engine shares.

pub mod constants;
pub mod error;
pub mod scalar;

pub use error::{MoteError, MoteResult};
pub use scalar::Scalar;
