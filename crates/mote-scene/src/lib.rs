//! # mote-scene
//!
//! The scene — single owner of all simulation state.
//!
//! ## Key Types
//!
//! - [`Scene`] — particle state, edge topology, obstacles, owned forces
//! - [`HalfPlane`] — static half-plane obstacle
//!
//! The scene exposes accumulation operations (energy, gradient, Hessians)
//! that integrators call, including trial-state variants that evaluate
//! forces at `(x + dx, v + dv)` without mutating stored state.

pub mod half_plane;
pub mod scene;

pub use half_plane::HalfPlane;
pub use scene::Scene;
