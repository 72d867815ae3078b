//! # mote-io
//!
//! Scene description contract, validation, scene building, and binary
//! state snapshots.
//!
//! Defines the boundary types that external systems (CLI, batch runners)
//! use to configure the Mote simulation core. The loader validates every
//! index and parameter before the core sees it, so the core's fatal
//! precondition checks never fire on user input.

pub mod builder;
pub mod contract;
pub mod snapshot;
pub mod validator;

pub use builder::{build_scene, BuiltScene};
pub use contract::{
    EdgeSpec, ForceSpec, HalfPlaneSpec, ParticleSpec, SceneDescription,
};
pub use snapshot::{read_snapshot, write_snapshot, SnapshotReader, SnapshotWriter};
pub use validator::validate_description;
