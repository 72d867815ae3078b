//! # mote-forces
//!
//! Force abstraction and the built-in force generators.
//!
//! ## Design
//!
//! The [`Force`] trait defines one additive contributor to the system's
//! potential energy and its derivatives. The scene owns a list of boxed
//! forces and accumulates their contributions into shared buffers; a force
//! never assumes exclusive access to the buffer it writes.
//!
//! Implementors:
//! - [`SimpleGravity`] — constant acceleration on every particle
//! - [`Spring`] — linear spring between two particles, optional damping
//! - [`GravitationalAttraction`] — pairwise inverse-square attraction
//! - [`Drag`] — linear velocity damping on every particle

pub mod drag;
pub mod gravitational;
pub mod gravity;
pub mod spring;
pub mod traits;

pub use drag::Drag;
pub use gravitational::GravitationalAttraction;
pub use gravity::SimpleGravity;
pub use spring::Spring;
pub use traits::Force;
