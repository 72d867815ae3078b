//! Explicit (symplectic) Euler integration.

use mote_scene::Scene;
use mote_types::{MoteResult, Scalar};

use crate::strategy::{SceneStepper, StepReport};

/// Explicit Euler: gradient evaluated at the pre-step state, velocity
/// updated first, position updated with the *new* velocity.
///
/// The update order is fixed; the position update must see the already
/// updated velocity.
pub struct ExplicitEuler;

impl ExplicitEuler {
    /// Creates the integrator.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExplicitEuler {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneStepper for ExplicitEuler {
    fn step_scene(&self, scene: &mut Scene, dt: Scalar) -> MoteResult<StepReport> {
        let n2 = scene.num_dofs();

        let mut grad = vec![0.0; n2];
        scene.accumulate_grad_u(&mut grad, &[], &[]);

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
        "explicit-euler"
    }
}
