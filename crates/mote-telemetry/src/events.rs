//! Simulation event types.
//!
//! Structured events emitted by the runner at various points in each
//! timestep. Events are lightweight value types that carry just enough
//! data to be useful for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the runner.
///
/// Events are tagged with a timestep index and carry domain-specific data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Timestep number (0-indexed).
    pub timestep: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// Timestep started.
    TimestepBegin {
        /// Target simulation time for this step (seconds).
        sim_time: f64,
    },

    /// Timestep completed.
    TimestepEnd {
        /// Wall-clock time for the entire timestep (seconds).
        wall_time: f64,
    },

    /// Energy snapshot at the post-step state.
    Energy {
        /// Kinetic energy.
        kinetic: f64,
        /// Potential energy summed over all forces.
        potential: f64,
        /// Kinetic plus potential.
        total: f64,
    },

    /// Integrator convergence report for the timestep.
    Convergence {
        /// Newton iterations used.
        iterations: u32,
        /// Final residual (infinity norm).
        final_residual: f64,
        /// Whether the integrator converged within tolerance.
        converged: bool,
    },

    /// Broad-phase candidate counts for the timestep's sweep.
    ContactCandidates {
        /// Particle-particle candidates.
        particle_particle: u32,
        /// Particle-edge candidates.
        particle_edge: u32,
        /// Particle-half-plane candidates.
        particle_half_plane: u32,
    },

    /// A non-converged step was accepted and counted.
    Divergence {
        /// Consecutive non-converged steps so far, this one included.
        consecutive_failures: u32,
        /// Residual the step ended on.
        residual: f64,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given timestep.
    pub fn new(timestep: u32, kind: EventKind) -> Self {
        Self { timestep, kind }
    }
}
