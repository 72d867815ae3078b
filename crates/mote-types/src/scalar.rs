//! Scalar type alias for the simulation.
//!
//! Using `f64` because the binary snapshot format is defined in the
//! scene's scalar width and downstream tooling expects doubles.

/// The floating-point type used throughout the simulation.
///
/// Set to `f64`. The snapshot format (raw position/velocity bytes) is
/// written in this width, so changing it is a format break.
pub type Scalar = f64;
