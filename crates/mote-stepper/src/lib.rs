//! # mote-stepper
//!
//! Time integration strategies for the Mote engine.
//!
//! ## Key Types
//!
//! - [`SceneStepper`] — pluggable integrator trait
//! - [`StepReport`] — per-step iteration/convergence diagnostics
//! - [`StepperConfig`] — serializable integrator selection
//! - [`ExplicitEuler`], [`SemiImplicitEuler`] — direct integrators
//! - [`ImplicitEuler`] — Newton iteration with a convergence budget
//! - [`LinearizedImplicitEuler`] — single linearized backward-Euler solve

pub mod config;
pub mod explicit_euler;
pub mod implicit_euler;
pub mod linearized_implicit_euler;
pub mod semi_implicit_euler;
pub mod strategy;

pub use config::{IntegratorKind, StepperConfig};
pub use explicit_euler::ExplicitEuler;
pub use implicit_euler::ImplicitEuler;
pub use linearized_implicit_euler::LinearizedImplicitEuler;
pub use semi_implicit_euler::SemiImplicitEuler;
pub use strategy::{SceneStepper, StepReport};
