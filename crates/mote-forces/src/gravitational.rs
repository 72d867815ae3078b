//! Pairwise gravitational attraction between two particles.
//!
//! `U = -G m_i m_j / ‖x_j - x_i‖`. The strength constant absorbs whatever
//! unit system the scene uses; it is not pinned to physical G.

use mote_math::dense::{add2, add_block, get2, outer};
use mote_math::{DMat2, DVec2, Mat};
use mote_types::Scalar;

use crate::traits::Force;

/// Inverse-square attraction between one pair of particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravitationalAttraction {
    pair: (usize, usize),
    strength: Scalar,
}

impl GravitationalAttraction {
    /// Creates an attraction between `pair` with strength constant `g`.
    pub fn new(pair: (usize, usize), strength: Scalar) -> Self {
        assert_ne!(pair.0, pair.1, "attraction endpoints must differ");
        assert!(strength >= 0.0, "attraction strength must be non-negative");
        Self { pair, strength }
    }

    /// Returns the attracted particle pair.
    pub fn pair(&self) -> (usize, usize) {
        self.pair
    }

    /// Returns the strength constant.
    pub fn strength(&self) -> Scalar {
        self.strength
    }

    fn axis(&self, x: &[Scalar]) -> (DVec2, Scalar) {
        let (i, j) = self.pair;
        let d = get2(x, j) - get2(x, i);
        let l = d.length();
        assert!(l > 0.0, "gravitational pair: particles coincide");
        (d / l, l)
    }
}

impl Force for GravitationalAttraction {
    fn add_energy(&self, x: &[Scalar], _v: &[Scalar], m: &[Scalar], energy: &mut Scalar) {
        let (i, j) = self.pair;
        let (_, l) = self.axis(x);
        *energy -= self.strength * m[2 * i] * m[2 * j] / l;
    }

    fn add_gradient(&self, x: &[Scalar], _v: &[Scalar], m: &[Scalar], grad: &mut [Scalar]) {
        debug_assert_eq!(x.len(), grad.len());
        let (i, j) = self.pair;
        let (nhat, l) = self.axis(x);

        let g = self.strength * m[2 * i] * m[2 * j] / (l * l) * nhat;
        add2(grad, i, -g);
        add2(grad, j, g);
    }

    fn add_hess_x(&self, x: &[Scalar], _v: &[Scalar], m: &[Scalar], hess: &mut Mat<f64>) {
        let (i, j) = self.pair;
        let (nhat, l) = self.axis(x);

        let scale = self.strength * m[2 * i] * m[2 * j] / (l * l * l);
        let block = scale * (DMat2::IDENTITY - 3.0 * outer(nhat, nhat));

        add_block(hess, i, i, block);
        add_block(hess, j, j, block);
        add_block(hess, i, j, -block);
        add_block(hess, j, i, -block);
    }

    fn add_hess_v(&self, _x: &[Scalar], _v: &[Scalar], _m: &[Scalar], _hess: &mut Mat<f64>) {
        // No velocity dependence.
    }

    fn box_clone(&self) -> Box<dyn Force> {
        Box::new(*self)
    }

    fn name(&self) -> &str {
        "gravitational"
    }
}
