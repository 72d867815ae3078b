//! # mote-contact
//!
//! Broad-phase collision detection for the Mote engine.
//!
//! Detectors scan the swept motion between two position states and report
//! candidate particle-particle, particle-edge, and particle-half-plane
//! pairs through a callback. Over-reporting is acceptable; a missed
//! contact is a correctness bug. A narrow phase downstream performs the
//! exact resolution.
//!
//! ## Key Types
//!
//! - [`CollisionDetector`] — pluggable detection strategy trait
//! - [`DetectionCallback`] — receiver for candidate pairs
//! - [`CandidateSet`] — deduplicating callback used in detectors and tests
//! - [`AllPairsDetector`] — brute-force swept-volume overlap
//! - [`SpatialHashDetector`] — uniform-grid acceleration

pub mod aabb;
pub mod all_pairs;
pub mod callback;
pub mod candidate_set;
pub mod detector;
pub mod spatial_hash;

pub use aabb::Aabb;
pub use all_pairs::AllPairsDetector;
pub use callback::DetectionCallback;
pub use candidate_set::CandidateSet;
pub use detector::{CollisionDetector, NullDetector};
pub use spatial_hash::SpatialHashDetector;
