//! Physical constants and simulation defaults.

use crate::scalar::Scalar;

/// Standard gravitational acceleration (m/s²), pointing down in y.
pub const GRAVITY: Scalar = 9.81;

/// Default simulation timestep (seconds).
pub const DEFAULT_DT: Scalar = 0.01;

/// Default Newton iteration budget for implicit integrators.
pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

/// Default Newton residual tolerance for implicit integrators.
pub const DEFAULT_TOLERANCE: Scalar = 1.0e-9;

/// Default particle radius (collision/rendering only, not dynamics).
pub const DEFAULT_PARTICLE_RADIUS: Scalar = 0.1;

/// Default edge radius.
pub const DEFAULT_EDGE_RADIUS: Scalar = 0.05;

/// Epsilon for floating-point comparisons.
pub const EPSILON: Scalar = 1.0e-12;
