//! Linear spring between two particles, with optional internal damping.
//!
//! Elastic part: `U = ½ k (‖x_j - x_i‖ - l0)²`.
//! The damping part is non-conservative and contributes to the gradient and
//! Hessians only, never to the energy.

use mote_math::dense::{add2, add_block, get2, outer};
use mote_math::{DMat2, DVec2, Mat};
use mote_types::Scalar;

use crate::traits::Force;

/// Linear spring connecting two particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    endpoints: (usize, usize),
    stiffness: Scalar,
    rest_length: Scalar,
    damping: Scalar,
}

impl Spring {
    /// Creates an undamped spring over `endpoints` with stiffness `k` and
    /// rest length `l0`.
    pub fn new(endpoints: (usize, usize), stiffness: Scalar, rest_length: Scalar) -> Self {
        Self::with_damping(endpoints, stiffness, rest_length, 0.0)
    }

    /// Creates a spring with internal damping coefficient `b`.
    pub fn with_damping(
        endpoints: (usize, usize),
        stiffness: Scalar,
        rest_length: Scalar,
        damping: Scalar,
    ) -> Self {
        assert_ne!(endpoints.0, endpoints.1, "spring endpoints must differ");
        assert!(stiffness >= 0.0, "spring stiffness must be non-negative");
        assert!(rest_length >= 0.0, "spring rest length must be non-negative");
        assert!(damping >= 0.0, "spring damping must be non-negative");
        Self {
            endpoints,
            stiffness,
            rest_length,
            damping,
        }
    }

    /// Returns the endpoint particle indices.
    pub fn endpoints(&self) -> (usize, usize) {
        self.endpoints
    }

    /// Returns the spring stiffness.
    pub fn stiffness(&self) -> Scalar {
        self.stiffness
    }

    /// Returns the rest length.
    pub fn rest_length(&self) -> Scalar {
        self.rest_length
    }

    /// Returns the damping coefficient.
    pub fn damping(&self) -> Scalar {
        self.damping
    }

    /// Unit axis from endpoint `i` to endpoint `j` and the current length.
    ///
    /// A zero-length spring has no defined axis; that is a precondition
    /// violation, not a recoverable state.
    fn axis(&self, x: &[Scalar]) -> (DVec2, Scalar) {
        let (i, j) = self.endpoints;
        let d = get2(x, j) - get2(x, i);
        let l = d.length();
        assert!(l > 0.0, "degenerate spring: endpoints coincide");
        (d / l, l)
    }
}

impl Force for Spring {
    fn add_energy(&self, x: &[Scalar], _v: &[Scalar], _m: &[Scalar], energy: &mut Scalar) {
        let (_, l) = self.axis(x);
        let stretch = l - self.rest_length;
        *energy += 0.5 * self.stiffness * stretch * stretch;
    }

    fn add_gradient(&self, x: &[Scalar], v: &[Scalar], _m: &[Scalar], grad: &mut [Scalar]) {
        debug_assert_eq!(x.len(), grad.len());
        let (i, j) = self.endpoints;
        let (nhat, l) = self.axis(x);

        let elastic = self.stiffness * (l - self.rest_length) * nhat;
        add2(grad, i, -elastic);
        add2(grad, j, elastic);

        if self.damping != 0.0 {
            let dv = get2(v, j) - get2(v, i);
            let damp = self.damping * nhat.dot(dv) * nhat;
            add2(grad, i, -damp);
            add2(grad, j, damp);
        }
    }

    fn add_hess_x(&self, x: &[Scalar], v: &[Scalar], _m: &[Scalar], hess: &mut Mat<f64>) {
        let (i, j) = self.endpoints;
        let (nhat, l) = self.axis(x);

        let nnt = outer(nhat, nhat);
        let proj = DMat2::IDENTITY - nnt;
        let mut block =
            self.stiffness * nnt + self.stiffness * (1.0 - self.rest_length / l) * proj;

        if self.damping != 0.0 {
            let dv = get2(v, j) - get2(v, i);
            block += (self.damping / l) * (outer(nhat, proj * dv) + nhat.dot(dv) * proj);
        }

        add_block(hess, i, i, block);
        add_block(hess, j, j, block);
        add_block(hess, i, j, -block);
        add_block(hess, j, i, -block);
    }

    fn add_hess_v(&self, x: &[Scalar], _v: &[Scalar], _m: &[Scalar], hess: &mut Mat<f64>) {
        if self.damping == 0.0 {
            return;
        }
        let (i, j) = self.endpoints;
        let (nhat, _) = self.axis(x);

        let block = self.damping * outer(nhat, nhat);
        add_block(hess, i, i, block);
        add_block(hess, j, j, block);
        add_block(hess, i, j, -block);
        add_block(hess, j, i, -block);
    }

    fn box_clone(&self) -> Box<dyn Force> {
        Box::new(*self)
    }

    fn name(&self) -> &str {
        "spring"
    }
}
