//! Error types for the Mote engine.
//!
//! All crates return `MoteResult<T>` from fallible operations.
//! Precondition violations (out-of-range indices, size mismatches)
//! panic instead of returning an error.

use thiserror::Error;

/// Unified error type for the Mote engine.
#[derive(Debug, Error)]
pub enum MoteError {
    /// Scene description is malformed or inconsistent.
    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Snapshot stream is truncated or does not match the scene size.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Implicit integrator failed to converge.
    #[error("Integrator did not converge after {iterations} iterations (residual: {residual:.2e})")]
    SolverDivergence {
        iterations: u32,
        residual: f64,
    },
}

/// Convenience alias for `Result<T, MoteError>`.
pub type MoteResult<T> = Result<T, MoteError>;
