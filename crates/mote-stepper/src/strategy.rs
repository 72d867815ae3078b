//! Scene stepper trait — the core abstraction for time integration.
//!
//! Every integrator implements this trait, enabling the driver to swap
//! integration strategies at runtime.

use mote_scene::Scene;
use mote_types::{MoteResult, Scalar};

/// Result of one integration step.
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Number of solver iterations actually performed.
    pub iterations: u32,
    /// Final residual norm (infinity norm of the Newton residual).
    pub final_residual: f64,
    /// Whether the step converged to tolerance. Direct integrators always
    /// converge; an implicit integrator reports `false` when its iteration
    /// budget runs out.
    pub converged: bool,
}

impl StepReport {
    /// Report for a non-iterative (direct) step.
    pub fn direct() -> Self {
        Self {
            iterations: 0,
            final_residual: 0.0,
            converged: true,
        }
    }
}

/// Trait for time integration strategies.
///
/// A stepper is a stateless strategy apart from its fixed configuration:
/// it holds no per-particle data, and two calls with identical scenes and
/// `dt` produce bit-identical results.
///
/// # Implementations
///
/// - [`ExplicitEuler`](crate::explicit_euler::ExplicitEuler) — gradient at
///   the pre-step state, position update with the post-update velocity
/// - [`SemiImplicitEuler`](crate::semi_implicit_euler::SemiImplicitEuler) —
///   gradient at the positionally advanced trial state
/// - [`ImplicitEuler`](crate::implicit_euler::ImplicitEuler) — Newton
///   iteration on the backward-Euler residual
/// - [`LinearizedImplicitEuler`](crate::linearized_implicit_euler::LinearizedImplicitEuler)
///   — one Newton step, one linear solve
pub trait SceneStepper: Send {
    /// Advance `scene` in place by `dt`.
    ///
    /// Non-convergence is reported through [`StepReport::converged`], not
    /// as an error; errors are reserved for failures of the linear-solve
    /// machinery itself.
    fn step_scene(&self, scene: &mut Scene, dt: Scalar) -> MoteResult<StepReport>;

    /// Returns a stable display identifier for the integrator.
    fn name(&self) -> &str;
}
