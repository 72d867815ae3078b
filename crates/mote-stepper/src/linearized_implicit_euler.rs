//! Linearized implicit Euler: one Newton step, one linear solve.
//!
//! Takes a single Newton step of backward Euler from the initial guess
//! `Δv = 0`. The residual and system matrix are evaluated at the trial
//! state `(x + dt·v, v)`:
//!
//! ```text
//! (M + dt²·∂²U/∂x² + dt·∂²U/∂x∂v) Δv = -dt · ∇U
//! ```
//!
//! With velocity-independent linear forces this reproduces explicit Euler
//! exactly, since the Hessians vanish and the system matrix reduces to `M`.

use mote_math::{DenseSolver, LuSolver, Mat};
use mote_scene::Scene;
use mote_types::{MoteError, MoteResult, Scalar};

use crate::strategy::{SceneStepper, StepReport};

/// Single-solve linearization of backward Euler.
pub struct LinearizedImplicitEuler {
    solver: LuSolver,
}

impl LinearizedImplicitEuler {
    /// Creates the integrator.
    pub fn new() -> Self {
        Self {
            solver: LuSolver::new(),
        }
    }
}

impl Default for LinearizedImplicitEuler {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneStepper for LinearizedImplicitEuler {
    fn step_scene(&self, scene: &mut Scene, dt: Scalar) -> MoteResult<StepReport> {
        let n2 = scene.num_dofs();
        if n2 == 0 {
            return Ok(StepReport::direct());
        }

        let m = scene.masses().to_vec();

        let dx: Vec<Scalar> = scene.velocities().iter().map(|&vd| dt * vd).collect();
        let dv = vec![0.0; n2];

        let mut grad = vec![0.0; n2];
        scene.accumulate_grad_u(&mut grad, &dx, &dv);

        let mut hess_x: Mat<f64> = Mat::zeros(n2, n2);
        scene.accumulate_ddudxdx(&mut hess_x, &dx, &dv);
        let mut hess_v: Mat<f64> = Mat::zeros(n2, n2);
        scene.accumulate_ddudxdv(&mut hess_v, &dx, &dv);

        let a: Mat<f64> = Mat::from_fn(n2, n2, |r, c| {
            let mass = if r == c { m[r] } else { 0.0 };
            mass + dt * dt * hess_x[(r, c)] + dt * hess_v[(r, c)]
        });

        let rhs: Vec<f64> = grad.iter().map(|g| -dt * g).collect();
        let mut delta = vec![0.0; n2];
        self.solver
            .solve(&a, &rhs, &mut delta)
            .map_err(|e| MoteError::InvalidConfig(format!("linearized solve failed: {e}")))?;

        let (x, v, _) = scene.state_mut();
        for d in 0..n2 {
            v[d] += delta[d];
        }
        for d in 0..n2 {
            x[d] += dt * v[d];
        }

        Ok(StepReport {
            iterations: 1,
            final_residual: 0.0,
            converged: true,
        })
    }

    fn name(&self) -> &str {
        "linearized-implicit-euler"
    }
}
