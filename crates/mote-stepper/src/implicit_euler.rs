//! Implicit (backward) Euler integration via Newton iteration.
//!
//! Solves for the velocity change `Δv` satisfying
//!
//! ```text
//! R(Δv) = M·Δv + dt · ∇U(x + dt(v + Δv), v + Δv) = 0
//! ```
//!
//! Each Newton iteration assembles `A = M + dt²·∂²U/∂x² + dt·∂²U/∂x∂v` at
//! the current trial state and solves `A·δ = -R` with a dense full-pivot LU.

use mote_math::dense::inf_norm;
use mote_math::{DenseSolver, LuSolver, Mat};
use mote_scene::Scene;
use mote_types::{MoteError, MoteResult, Scalar};

use crate::strategy::{SceneStepper, StepReport};

/// Newton-iteration backward Euler with an explicit convergence budget.
pub struct ImplicitEuler {
    max_iterations: u32,
    tolerance: Scalar,
    solver: LuSolver,
}

impl ImplicitEuler {
    /// Creates the integrator with an iteration budget and residual
    /// tolerance (infinity norm).
    pub fn new(max_iterations: u32, tolerance: Scalar) -> Self {
        Self {
            max_iterations,
            tolerance,
            solver: LuSolver::new(),
        }
    }

    /// Returns the iteration budget.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Returns the residual tolerance.
    pub fn tolerance(&self) -> Scalar {
        self.tolerance
    }
}

impl Default for ImplicitEuler {
    fn default() -> Self {
        Self::new(
            mote_types::constants::DEFAULT_MAX_ITERATIONS,
            mote_types::constants::DEFAULT_TOLERANCE,
        )
    }
}

impl SceneStepper for ImplicitEuler {
    /// Advance the scene by one backward-Euler step.
    ///
    /// When the iteration budget runs out the scene still receives the
    /// final Newton iterate and the report carries `converged = false`;
    /// drivers that want rollback-and-retry snapshot the scene with
    /// `copy_state` before stepping.
    fn step_scene(&self, scene: &mut Scene, dt: Scalar) -> MoteResult<StepReport> {
        let n2 = scene.num_dofs();
        if n2 == 0 {
            return Ok(StepReport::direct());
        }

        let m = scene.masses().to_vec();

        let mut dv = vec![0.0; n2];
        let mut dx = vec![0.0; n2];
        let mut residual = vec![0.0; n2];
        let mut delta = vec![0.0; n2];

        let mut iterations = 0u32;
        let mut converged = false;
        let mut res_norm;

        loop {
            for d in 0..n2 {
                dx[d] = dt * (scene.velocities()[d] + dv[d]);
            }

            residual.fill(0.0);
            scene.accumulate_grad_u(&mut residual, &dx, &dv);
            for d in 0..n2 {
                residual[d] = m[d] * dv[d] + dt * residual[d];
            }

            res_norm = inf_norm(&residual);
            if res_norm < self.tolerance {
                converged = true;
                break;
            }
            if iterations >= self.max_iterations {
                break;
            }

            let mut hess_x: Mat<f64> = Mat::zeros(n2, n2);
            scene.accumulate_ddudxdx(&mut hess_x, &dx, &dv);
            let mut hess_v: Mat<f64> = Mat::zeros(n2, n2);
            scene.accumulate_ddudxdv(&mut hess_v, &dx, &dv);

            let a: Mat<f64> = Mat::from_fn(n2, n2, |r, c| {
                let mass = if r == c { m[r] } else { 0.0 };
                mass + dt * dt * hess_x[(r, c)] + dt * hess_v[(r, c)]
            });

            let neg_residual: Vec<f64> = residual.iter().map(|r| -r).collect();
            self.solver
                .solve(&a, &neg_residual, &mut delta)
                .map_err(|e| MoteError::InvalidConfig(format!("Newton solve failed: {e}")))?;

            for d in 0..n2 {
                dv[d] += delta[d];
            }
            iterations += 1;
        }

        let (x, v, _) = scene.state_mut();
        for d in 0..n2 {
            v[d] += dv[d];
        }
        for d in 0..n2 {
            x[d] += dt * v[d];
        }

        Ok(StepReport {
            iterations,
            final_residual: res_norm,
            converged,
        })
    }

    fn name(&self) -> &str {
        "implicit-euler"
    }
}
