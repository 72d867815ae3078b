//! Constant gravity — the simplest force.
//!
//! `U = -Σ_i m_i (g · x_i)`, so the gradient is the constant `-m_i g` per
//! particle and both Hessian blocks are exactly zero.

use mote_math::dense::{add2, get2};
use mote_math::{DVec2, Mat};
use mote_types::Scalar;

use crate::traits::Force;

/// Constant acceleration applied to every particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleGravity {
    gravity: DVec2,
}

impl SimpleGravity {
    /// Creates a gravity force with acceleration `gravity` (m/s²).
    pub fn new(gravity: DVec2) -> Self {
        Self { gravity }
    }

    /// Returns the acceleration vector.
    pub fn gravity(&self) -> DVec2 {
        self.gravity
    }
}

impl Force for SimpleGravity {
    fn add_energy(&self, x: &[Scalar], v: &[Scalar], m: &[Scalar], energy: &mut Scalar) {
        debug_assert_eq!(x.len(), v.len());
        debug_assert_eq!(x.len(), m.len());
        for i in 0..x.len() / 2 {
            *energy -= m[2 * i] * self.gravity.dot(get2(x, i));
        }
    }

    fn add_gradient(&self, x: &[Scalar], v: &[Scalar], m: &[Scalar], grad: &mut [Scalar]) {
        debug_assert_eq!(x.len(), v.len());
        debug_assert_eq!(x.len(), grad.len());
        for i in 0..x.len() / 2 {
            add2(grad, i, -m[2 * i] * self.gravity);
        }
    }

    fn add_hess_x(&self, _x: &[Scalar], _v: &[Scalar], _m: &[Scalar], _hess: &mut Mat<f64>) {
        // ∂²U/∂x² ≡ 0 for a linear potential.
    }

    fn add_hess_v(&self, _x: &[Scalar], _v: &[Scalar], _m: &[Scalar], _hess: &mut Mat<f64>) {
        // No velocity dependence.
    }

    fn box_clone(&self) -> Box<dyn Force> {
        Box::new(*self)
    }

    fn name(&self) -> &str {
        "simple-gravity"
    }
}
