//! Force trait — the core capability set for potential-energy contributors.
//!
//! Every force implements this trait, enabling the scene to accumulate
//! energies and derivatives without knowing which forces are active.

use mote_math::Mat;
use mote_types::Scalar;

/// Trait for forces (potential-energy contributors).
///
/// All state slices use the interleaved layout: `x`, `v`, and `m` each hold
/// `2n` scalars, with particle `i` at slots `2i, 2i+1`. Masses are stored
/// duplicated in both slots. Parameters are fixed at construction; a force
/// holds no mutable simulation state.
///
/// Sign convention: the gradient buffers accumulate `∂U/∂x`, so the force a
/// particle feels is the *negation* of what `add_gradient` writes.
///
/// # Implementations
///
/// - [`SimpleGravity`](crate::gravity::SimpleGravity) — zero Hessians
/// - [`Spring`](crate::spring::Spring) — full position/velocity Hessians
/// - [`GravitationalAttraction`](crate::gravitational::GravitationalAttraction)
/// - [`Drag`](crate::drag::Drag) — velocity Hessian only
pub trait Force: Send + Sync {
    /// Adds this force's potential energy at `(x, v)` into `energy`.
    fn add_energy(&self, x: &[Scalar], v: &[Scalar], m: &[Scalar], energy: &mut Scalar);

    /// Adds `∂U/∂x` into the full-length gradient buffer.
    fn add_gradient(&self, x: &[Scalar], v: &[Scalar], m: &[Scalar], grad: &mut [Scalar]);

    /// Adds `∂²U/∂x²` blocks into a `(2n, 2n)` matrix.
    fn add_hess_x(&self, x: &[Scalar], v: &[Scalar], m: &[Scalar], hess: &mut Mat<f64>);

    /// Adds `∂(∂U/∂x)/∂v` blocks into a `(2n, 2n)` matrix.
    fn add_hess_v(&self, x: &[Scalar], v: &[Scalar], m: &[Scalar], hess: &mut Mat<f64>);

    /// Produces an independently owned deep copy with identical parameters.
    ///
    /// Used by scene copy/assignment; the clone shares no storage with
    /// the original.
    fn box_clone(&self) -> Box<dyn Force>;

    /// Returns the name of this force.
    fn name(&self) -> &str;
}

impl Clone for Box<dyn Force> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}
