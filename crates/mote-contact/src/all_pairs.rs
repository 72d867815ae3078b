//! Brute-force all-pairs detection.

use mote_math::dense::get2;
use mote_scene::Scene;
use mote_types::Scalar;

use crate::aabb::Aabb;
use crate::callback::DetectionCallback;
use crate::detector::CollisionDetector;

/// Tests every pair with a swept-volume overlap check.
///
/// Quadratic in particle count, but exact loop structure guarantees each
/// unordered pair is visited exactly once. The baseline the accelerated
/// detectors are validated against.
pub struct AllPairsDetector;

impl AllPairsDetector {
    /// Creates the detector.
    pub fn new() -> Self {
        Self
    }
}

impl Default for AllPairsDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionDetector for AllPairsDetector {
    fn perform_collision_detection(
        &self,
        scene: &Scene,
        xs_start: &[Scalar],
        xs_end: &[Scalar],
        callback: &mut dyn DetectionCallback,
    ) {
        assert_eq!(xs_start.len(), scene.num_dofs(), "start positions size mismatch");
        assert_eq!(xs_end.len(), scene.num_dofs(), "end positions size mismatch");
        let n = scene.num_particles();

        let boxes: Vec<Aabb> = (0..n)
            .map(|i| Aabb::swept(get2(xs_start, i), get2(xs_end, i), scene.radius(i)))
            .collect();

        for i in 0..n {
            for j in (i + 1)..n {
                if boxes[i].overlaps(&boxes[j]) {
                    callback.particle_particle(i, j);
                }
            }
        }

        for (e, &(a, b)) in scene.edges().iter().enumerate() {
            let sweep_a = Aabb::swept(get2(xs_start, a), get2(xs_end, a), 0.0);
            let sweep_b = Aabb::swept(get2(xs_start, b), get2(xs_end, b), 0.0);
            let edge_box = sweep_a.union(&sweep_b).inflated(scene.edge_radius(e));
            for p in 0..n {
                if p == a || p == b {
                    continue;
                }
                if boxes[p].overlaps(&edge_box) {
                    callback.particle_edge(p, e);
                }
            }
        }

        // Signed distance is linear along a straight-line sweep, so the
        // segment minimum is attained at an endpoint.
        for (h, plane) in scene.half_planes().iter().enumerate() {
            for p in 0..n {
                let d_start = plane.signed_distance(get2(xs_start, p));
                let d_end = plane.signed_distance(get2(xs_end, p));
                if d_start.min(d_end) <= scene.radius(p) {
                    callback.particle_half_plane(p, h);
                }
            }
        }
    }

    fn name(&self) -> &str {
        "all-pairs"
    }
}
