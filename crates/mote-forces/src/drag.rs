//! Linear drag damping on every particle.
//!
//! Non-conservative: contributes `+b v_i` to the gradient (force `-b v_i`)
//! and `b` on the velocity-Hessian diagonal, but no energy and no position
//! Hessian.

use mote_math::dense::{add2, get2};
use mote_math::Mat;
use mote_types::Scalar;

use crate::traits::Force;

/// Linear velocity damping applied to every particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    beta: Scalar,
}

impl Drag {
    /// Creates a drag force with damping coefficient `beta`.
    pub fn new(beta: Scalar) -> Self {
        assert!(beta >= 0.0, "drag coefficient must be non-negative");
        Self { beta }
    }

    /// Returns the damping coefficient.
    pub fn beta(&self) -> Scalar {
        self.beta
    }
}

impl Force for Drag {
    fn add_energy(&self, _x: &[Scalar], _v: &[Scalar], _m: &[Scalar], _energy: &mut Scalar) {
        // Dissipative force, no potential.
    }

    fn add_gradient(&self, x: &[Scalar], v: &[Scalar], _m: &[Scalar], grad: &mut [Scalar]) {
        debug_assert_eq!(x.len(), v.len());
        debug_assert_eq!(x.len(), grad.len());
        for i in 0..v.len() / 2 {
            add2(grad, i, self.beta * get2(v, i));
        }
    }

    fn add_hess_x(&self, _x: &[Scalar], _v: &[Scalar], _m: &[Scalar], _hess: &mut Mat<f64>) {
        // No position dependence.
    }

    fn add_hess_v(&self, x: &[Scalar], _v: &[Scalar], _m: &[Scalar], hess: &mut Mat<f64>) {
        for d in 0..x.len() {
            hess[(d, d)] += self.beta;
        }
    }

    fn box_clone(&self) -> Box<dyn Force> {
        Box::new(*self)
    }

    fn name(&self) -> &str {
        "drag"
    }
}
