//! Scene description contract types.
//!
//! These types define the configuration boundary of the Mote engine.
//! A scene description is a JSON document listing particles, edges,
//! half-plane obstacles, forces, and the integrator to run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use mote_stepper::StepperConfig;
use mote_types::constants::{DEFAULT_EDGE_RADIUS, DEFAULT_PARTICLE_RADIUS};
use mote_types::{MoteError, MoteResult, Scalar};

/// Complete description of a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Optional display name for the scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Particles, in index order.
    pub particles: Vec<ParticleSpec>,

    /// Edges between particles.
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,

    /// Half-plane obstacles.
    #[serde(default)]
    pub half_planes: Vec<HalfPlaneSpec>,

    /// Force generators.
    #[serde(default)]
    pub forces: Vec<ForceSpec>,

    /// Integrator selection and parameters.
    pub integrator: StepperConfig,

    /// Total simulation time (seconds).
    #[serde(default = "default_duration")]
    pub duration: Scalar,
}

/// One particle's initial state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleSpec {
    /// Initial position.
    pub px: Scalar,
    pub py: Scalar,

    /// Initial velocity.
    #[serde(default)]
    pub vx: Scalar,
    #[serde(default)]
    pub vy: Scalar,

    /// Mass. Must be positive.
    pub m: Scalar,

    /// Fixed flag, stored on the particle as metadata.
    #[serde(default)]
    pub fixed: bool,

    /// Collision/rendering radius.
    #[serde(default = "default_particle_radius")]
    pub radius: Scalar,
}

/// One edge between two particle indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSpec {
    /// First endpoint (particle index).
    pub i: usize,
    /// Second endpoint (particle index).
    pub j: usize,
    /// Edge thickness for collision/rendering.
    #[serde(default = "default_edge_radius")]
    pub radius: Scalar,
}

/// A half-plane obstacle: the solid region behind a boundary point and
/// outward normal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HalfPlaneSpec {
    /// A point on the boundary.
    pub px: Scalar,
    pub py: Scalar,
    /// Outward normal. Need not be unit length; the builder normalizes.
    pub nx: Scalar,
    pub ny: Scalar,
}

/// One force generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ForceSpec {
    /// Constant gravity applied to every particle.
    SimpleGravity {
        /// Acceleration x component.
        fx: Scalar,
        /// Acceleration y component.
        fy: Scalar,
    },

    /// Damped linear spring along an edge.
    Spring {
        /// Index into `edges`; the spring connects that edge's endpoints.
        edge: usize,
        /// Stiffness.
        k: Scalar,
        /// Rest length.
        l0: Scalar,
        /// Damping coefficient.
        #[serde(default)]
        b: Scalar,
    },

    /// Pairwise gravitational attraction between two particles.
    Gravitational {
        /// First particle index.
        i: usize,
        /// Second particle index.
        j: usize,
        /// Gravitational strength constant.
        g: Scalar,
    },

    /// Linear drag applied to every particle.
    Drag {
        /// Drag coefficient.
        b: Scalar,
    },
}

fn default_duration() -> Scalar {
    1.0
}

fn default_particle_radius() -> Scalar {
    DEFAULT_PARTICLE_RADIUS
}

fn default_edge_radius() -> Scalar {
    DEFAULT_EDGE_RADIUS
}

impl SceneDescription {
    /// Parses a description from a JSON string.
    pub fn from_json_str(json: &str) -> MoteResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| MoteError::Serialization(format!("scene description parse failed: {e}")))
    }

    /// Reads and parses a description file.
    pub fn from_path(path: &Path) -> MoteResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serializes the description to pretty-printed JSON.
    pub fn to_json_string(&self) -> MoteResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MoteError::Serialization(format!("scene description encode failed: {e}")))
    }
}
