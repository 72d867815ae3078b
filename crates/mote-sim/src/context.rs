//! Simulation context — explicit run state, no globals.

use mote_contact::CollisionDetector;
use mote_io::BuiltScene;
use mote_scene::Scene;
use mote_stepper::SceneStepper;
use mote_telemetry::EventBus;
use mote_types::Scalar;

/// Everything a simulation run needs, owned in one place and passed by
/// reference through the loop.
pub struct SimContext {
    /// Simulation scene, mutated in place each step.
    pub scene: Scene,
    /// Integration strategy.
    pub stepper: Box<dyn SceneStepper>,
    /// Broad-phase detector; `None` disables contact reporting.
    pub detector: Option<Box<dyn CollisionDetector>>,
    /// Telemetry bus; sinks are registered before the run starts.
    pub bus: EventBus,
    /// Timestep (seconds).
    pub dt: Scalar,
    /// Total simulation time (seconds).
    pub duration: Scalar,
}

impl SimContext {
    /// Creates a context with no detector and an empty bus.
    pub fn new(
        scene: Scene,
        stepper: Box<dyn SceneStepper>,
        dt: Scalar,
        duration: Scalar,
    ) -> Self {
        Self {
            scene,
            stepper,
            detector: None,
            bus: EventBus::new(),
            dt,
            duration,
        }
    }

    /// Builds a context from a loaded scene description.
    pub fn from_built(built: BuiltScene) -> Self {
        Self::new(built.scene, built.stepper, built.dt, built.duration)
    }

    /// Attaches a broad-phase detector.
    pub fn with_detector(mut self, detector: Box<dyn CollisionDetector>) -> Self {
        self.detector = Some(detector);
        self
    }
}
