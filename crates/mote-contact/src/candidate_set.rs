//! Deduplicating candidate collector.

use std::collections::BTreeSet;

use crate::callback::DetectionCallback;

/// Collects candidate pairs into ordered sets, deduplicating as it goes.
///
/// Particle pairs are normalized to `(min, max)` before insertion, so
/// `(i, j)` and `(j, i)` land in the same slot. Iteration order is the
/// sets' ascending order, which keeps replay deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    particle_particle: BTreeSet<(usize, usize)>,
    particle_edge: BTreeSet<(usize, usize)>,
    particle_half_plane: BTreeSet<(usize, usize)>,
}

impl CandidateSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized particle-particle candidates.
    pub fn particle_particle(&self) -> &BTreeSet<(usize, usize)> {
        &self.particle_particle
    }

    /// Particle-edge candidates as `(particle, edge)`.
    pub fn particle_edge(&self) -> &BTreeSet<(usize, usize)> {
        &self.particle_edge
    }

    /// Particle-half-plane candidates as `(particle, half_plane)`.
    pub fn particle_half_plane(&self) -> &BTreeSet<(usize, usize)> {
        &self.particle_half_plane
    }

    /// Total candidate count across all three categories.
    pub fn len(&self) -> usize {
        self.particle_particle.len() + self.particle_edge.len() + self.particle_half_plane.len()
    }

    /// Returns `true` when no candidates have been collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all collected candidates.
    pub fn clear(&mut self) {
        self.particle_particle.clear();
        self.particle_edge.clear();
        self.particle_half_plane.clear();
    }

    /// Replays every collected candidate into `callback` in ascending
    /// order.
    pub fn replay(&self, callback: &mut dyn DetectionCallback) {
        for &(i, j) in &self.particle_particle {
            callback.particle_particle(i, j);
        }
        for &(p, e) in &self.particle_edge {
            callback.particle_edge(p, e);
        }
        for &(p, h) in &self.particle_half_plane {
            callback.particle_half_plane(p, h);
        }
    }
}

impl DetectionCallback for CandidateSet {
    fn particle_particle(&mut self, i: usize, j: usize) {
        let pair = if i <= j { (i, j) } else { (j, i) };
        self.particle_particle.insert(pair);
    }

    fn particle_edge(&mut self, p: usize, e: usize) {
        self.particle_edge.insert((p, e));
    }

    fn particle_half_plane(&mut self, p: usize, h: usize) {
        self.particle_half_plane.insert((p, h));
    }
}
