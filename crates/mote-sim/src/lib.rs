//! # mote-sim
//!
//! Headless simulation driver: owns the scene, the integrator, optional
//! collision detection, and the telemetry bus, and advances the scene
//! through a full run.
//!
//! ## Key Types
//!
//! - [`SimContext`] — everything one run needs, passed through the loop
//! - [`SimRunner`] — executes the loop, applies the divergence policy
//! - [`RunSummary`] — aggregate metrics for a completed run

pub mod context;
pub mod metrics;
pub mod runner;

pub use context::SimContext;
pub use metrics::RunSummary;
pub use runner::SimRunner;
