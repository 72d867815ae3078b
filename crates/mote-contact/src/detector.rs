//! Collision detector trait.

use mote_scene::Scene;
use mote_types::Scalar;

use crate::callback::DetectionCallback;

/// Trait for broad-phase collision detection strategies.
///
/// `perform_collision_detection` scans the swept motion from `xs_start`
/// to `xs_end` (interleaved position vectors of the scene's state length)
/// and reports every particle-particle, particle-edge, and
/// particle-half-plane pair that may have come into contact during the
/// sweep. Over-reporting is acceptable; missing a contact is a bug.
/// Each unordered pair is reported at most once per call.
///
/// # Implementations
/// - [`AllPairsDetector`](crate::all_pairs::AllPairsDetector) — brute
///   force, every pair gets a swept-volume overlap test
/// - [`SpatialHashDetector`](crate::spatial_hash::SpatialHashDetector) —
///   uniform-grid binning culls far-apart pairs first
pub trait CollisionDetector: Send {
    /// Report candidate pairs for the motion from `xs_start` to `xs_end`.
    ///
    /// Both slices must be the scene's full state length.
    fn perform_collision_detection(
        &self,
        scene: &Scene,
        xs_start: &[Scalar],
        xs_end: &[Scalar],
        callback: &mut dyn DetectionCallback,
    );

    /// Returns a stable display identifier for the strategy.
    fn name(&self) -> &str;
}

/// No-op detector for runs with collision reporting disabled.
pub struct NullDetector;

impl CollisionDetector for NullDetector {
    fn perform_collision_detection(
        &self,
        _scene: &Scene,
        _xs_start: &[Scalar],
        _xs_end: &[Scalar],
        _callback: &mut dyn DetectionCallback,
    ) {
    }

    fn name(&self) -> &str {
        "null-detector"
    }
}
