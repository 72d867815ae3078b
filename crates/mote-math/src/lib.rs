//! # mote-math
//!
//! Linear algebra primitives for the Mote simulation engine.
//!
//! Provides:
//! - Re-exports of `glam` f64 types (`DVec2`, `DMat2`) and faer's dense matrix
//! - 2×2 block accumulation into system-sized matrices
//! - Symmetry checking for assembled Hessians
//! - Dense full-pivot LU solver interface

pub mod dense;
pub mod solver;

// Re-export the canonical math types for Mote. Positions and velocities are
// interleaved flat vectors; per-particle views are DVec2.
pub use faer::Mat;
pub use glam::{DMat2, DVec2};

pub use solver::{DenseSolver, LuSolver};
