//! Detection callback trait.
//!
//! Detectors push candidate pairs into a callback rather than returning
//! collections, so callers can filter, count, or resolve on the fly.

/// Receiver for broad-phase candidate pairs.
///
/// A detector invokes each method at most once per unordered pair per
/// detection pass. Indices refer to the scene's particle, edge, and
/// half-plane arrays respectively.
pub trait DetectionCallback {
    /// A particle pair `(i, j)` that may come into contact. Reported with
    /// `i < j`; never a self-pair.
    fn particle_particle(&mut self, i: usize, j: usize);

    /// Particle `p` against edge `e`. Never reported for an edge's own
    /// endpoints.
    fn particle_edge(&mut self, p: usize, e: usize);

    /// Particle `p` against half-plane `h`.
    fn particle_half_plane(&mut self, p: usize, h: usize);
}
