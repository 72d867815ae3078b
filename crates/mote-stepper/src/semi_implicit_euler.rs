//! Semi-implicit Euler integration.

use mote_scene::Scene;
use mote_types::{MoteResult, Scalar};

use crate::strategy::{SceneStepper, StepReport};

/// Semi-implicit Euler: the gradient is evaluated at the positionally
/// advanced trial state `(x + dt·v, v)` through the scene's trial-state
/// query, then velocity and position update in the same order as
/// [`ExplicitEuler`](crate::explicit_euler::ExplicitEuler).
pub struct SemiImplicitEuler;

impl SemiImplicitEuler {
    /// Creates the integrator.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SemiImplicitEuler {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneStepper for SemiImplicitEuler {
    fn step_scene(&self, scene: &mut Scene, dt: Scalar) -> MoteResult<StepReport> {
        let n2 = scene.num_dofs();

        let dx: Vec<Scalar> = scene.velocities().iter().map(|&vd| dt * vd).collect();
        let dv = vec![0.0; n2];

        let mut grad = vec![0.0; n2];
        scene.accumulate_grad_u(&mut grad, &dx, &dv);

        let (x, v, m) = scene.state_mut();
        for d in 0..n2 {
            v[d] -= dt * grad[d] / m[d];
        }
        for d in 0..n2 {
            x[d] += dt * v[d];
        }

        Ok(StepReport::direct())
    }

    fn name(&self) -> &str {
        "semi-implicit-euler"
    }
}
