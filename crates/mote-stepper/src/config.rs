//! Integrator configuration.
//!
//! Serializable selection of the integration strategy and its parameters,
//! carried in the scene description's `integrator` section.

use serde::{Deserialize, Serialize};

use mote_types::constants::{DEFAULT_DT, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use mote_types::Scalar;

use crate::explicit_euler::ExplicitEuler;
use crate::implicit_euler::ImplicitEuler;
use crate::linearized_implicit_euler::LinearizedImplicitEuler;
use crate::semi_implicit_euler::SemiImplicitEuler;
use crate::strategy::SceneStepper;

/// Which integration strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntegratorKind {
    /// Gradient at the pre-step state, position update with new velocity.
    ExplicitEuler,
    /// Gradient at the positionally advanced trial state.
    SemiImplicitEuler,
    /// Newton iteration on the backward-Euler residual.
    ImplicitEuler,
    /// One Newton step of backward Euler, one linear solve.
    LinearizedImplicitEuler,
}

impl IntegratorKind {
    /// Returns all integrator kinds.
    pub fn all() -> &'static [IntegratorKind] {
        &[
            IntegratorKind::ExplicitEuler,
            IntegratorKind::SemiImplicitEuler,
            IntegratorKind::ImplicitEuler,
            IntegratorKind::LinearizedImplicitEuler,
        ]
    }

    /// Returns a human-readable name, matching the stepper's `name()`.
    pub fn name(&self) -> &'static str {
        match self {
            IntegratorKind::ExplicitEuler => "explicit-euler",
            IntegratorKind::SemiImplicitEuler => "semi-implicit-euler",
            IntegratorKind::ImplicitEuler => "implicit-euler",
            IntegratorKind::LinearizedImplicitEuler => "linearized-implicit-euler",
        }
    }
}

/// Configuration for the scene's integrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepperConfig {
    /// Integration strategy.
    pub kind: IntegratorKind,

    /// Timestep size (seconds).
    pub dt: Scalar,

    /// Newton iteration budget. Used by the implicit integrator only.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Newton residual tolerance (infinity norm). Used by the implicit
    /// integrator only.
    #[serde(default = "default_tolerance")]
    pub tolerance: Scalar,
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

fn default_tolerance() -> Scalar {
    DEFAULT_TOLERANCE
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            kind: IntegratorKind::ExplicitEuler,
            dt: DEFAULT_DT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl StepperConfig {
    /// Builds the configured stepper.
    pub fn build(&self) -> Box<dyn SceneStepper> {
        match self.kind {
            IntegratorKind::ExplicitEuler => Box::new(ExplicitEuler::new()),
            IntegratorKind::SemiImplicitEuler => Box::new(SemiImplicitEuler::new()),
            IntegratorKind::ImplicitEuler => {
                Box::new(ImplicitEuler::new(self.max_iterations, self.tolerance))
            }
            IntegratorKind::LinearizedImplicitEuler => Box::new(LinearizedImplicitEuler::new()),
        }
    }
}
