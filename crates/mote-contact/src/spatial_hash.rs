//! Spatial hash detection over a uniform grid.
//!
//! Partitions the plane into square cells and bins each particle's swept
//! bounding box into every cell it covers. Two boxes that overlap must
//! share at least one cell, so same-cell checks preserve the no-miss
//! guarantee without neighbor scans.

use std::collections::HashMap;

use mote_math::dense::get2;
use mote_scene::Scene;
use mote_types::constants::DEFAULT_PARTICLE_RADIUS;
use mote_types::Scalar;

use crate::aabb::Aabb;
use crate::callback::DetectionCallback;
use crate::candidate_set::CandidateSet;
use crate::detector::CollisionDetector;

/// Uniform-grid detector.
///
/// Cell size should be on the order of a typical swept extent plus
/// radius; too small and boxes span many cells, too large and the grid
/// degenerates to all-pairs.
pub struct SpatialHashDetector {
    /// Inverse cell size (cached for binning).
    inv_cell_size: Scalar,
}

impl SpatialHashDetector {
    /// Creates the detector with the given cell size.
    pub fn new(cell_size: Scalar) -> Self {
        let cell_size = cell_size.max(1e-6);
        Self {
            inv_cell_size: 1.0 / cell_size,
        }
    }

    /// Inclusive cell-index range covered by `aabb`.
    fn cell_range(&self, aabb: &Aabb) -> (i32, i32, i32, i32) {
        let x0 = (aabb.min.x * self.inv_cell_size).floor() as i32;
        let y0 = (aabb.min.y * self.inv_cell_size).floor() as i32;
        let x1 = (aabb.max.x * self.inv_cell_size).floor() as i32;
        let y1 = (aabb.max.y * self.inv_cell_size).floor() as i32;
        (x0, y0, x1, y1)
    }
}

impl Default for SpatialHashDetector {
    fn default() -> Self {
        Self::new(4.0 * DEFAULT_PARTICLE_RADIUS)
    }
}

impl CollisionDetector for SpatialHashDetector {
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

        let mut grid: HashMap<(i32, i32), Vec<usize>> = HashMap::new();
        for (i, aabb) in boxes.iter().enumerate() {
            let (x0, y0, x1, y1) = self.cell_range(aabb);
            for cx in x0..=x1 {
                for cy in y0..=y1 {
                    grid.entry((cx, cy)).or_default().push(i);
                }
            }
        }

        // A box spanning several cells produces repeat pairs; the
        // candidate set deduplicates before replaying to the caller.
        let mut candidates = CandidateSet::new();

        for bin in grid.values() {
            for a in 0..bin.len() {
                for b in (a + 1)..bin.len() {
                    let (i, j) = (bin[a], bin[b]);
                    if boxes[i].overlaps(&boxes[j]) {
                        DetectionCallback::particle_particle(&mut candidates, i, j);
                    }
                }
            }
        }

        for (e, &(a, b)) in scene.edges().iter().enumerate() {
            let sweep_a = Aabb::swept(get2(xs_start, a), get2(xs_end, a), 0.0);
            let sweep_b = Aabb::swept(get2(xs_start, b), get2(xs_end, b), 0.0);
            let edge_box = sweep_a.union(&sweep_b).inflated(scene.edge_radius(e));

            let (x0, y0, x1, y1) = self.cell_range(&edge_box);
            for cx in x0..=x1 {
                for cy in y0..=y1 {
                    if let Some(bin) = grid.get(&(cx, cy)) {
                        for &p in bin {
                            if p == a || p == b {
                                continue;
                            }
                            if boxes[p].overlaps(&edge_box) {
                                DetectionCallback::particle_edge(&mut candidates, p, e);
                            }
                        }
                    }
                }
            }
        }

        // Half-planes are unbounded, so the grid buys nothing; test the
        // linear signed distance at the sweep endpoints directly.
        for (h, plane) in scene.half_planes().iter().enumerate() {
            for p in 0..n {
                let d_start = plane.signed_distance(get2(xs_start, p));
                let d_end = plane.signed_distance(get2(xs_end, p));
                if d_start.min(d_end) <= scene.radius(p) {
                    DetectionCallback::particle_half_plane(&mut candidates, p, h);
                }
            }
        }

        candidates.replay(callback);
    }

    fn name(&self) -> &str {
        "spatial-hash"
    }
}
