//! Scene building from a validated description.

use mote_forces::{Drag, GravitationalAttraction, SimpleGravity, Spring};
use mote_math::DVec2;
use mote_scene::Scene;
use mote_stepper::SceneStepper;
use mote_types::{MoteResult, Scalar};

use crate::contract::{ForceSpec, SceneDescription};
use crate::validator::validate_description;

/// A scene ready to run, with its configured integrator and run length.
pub struct BuiltScene {
    /// Populated simulation scene.
    pub scene: Scene,
    /// Configured integration strategy.
    pub stepper: Box<dyn SceneStepper>,
    /// Timestep (seconds).
    pub dt: Scalar,
    /// Total simulation time (seconds).
    pub duration: Scalar,
}

/// Validates `description` and builds the scene it describes.
///
/// Validation runs first, so the scene's fatal precondition checks never
/// fire on description content.
pub fn build_scene(description: &SceneDescription) -> MoteResult<BuiltScene> {
    validate_description(description)?;

    let mut scene = Scene::with_particles(description.particles.len());

    for (i, p) in description.particles.iter().enumerate() {
        scene.set_position(i, DVec2::new(p.px, p.py));
        scene.set_velocity(i, DVec2::new(p.vx, p.vy));
        scene.set_mass(i, p.m);
        scene.set_fixed(i, p.fixed);
        scene.set_radius(i, p.radius);
    }

    for edge in &description.edges {
        scene.insert_edge((edge.i, edge.j), edge.radius);
    }

    for plane in &description.half_planes {
        scene.insert_half_plane(
            DVec2::new(plane.px, plane.py),
            DVec2::new(plane.nx, plane.ny),
        );
    }

    for force in &description.forces {
        match *force {
            ForceSpec::SimpleGravity { fx, fy } => {
                scene.insert_force(Box::new(SimpleGravity::new(DVec2::new(fx, fy))));
            }
            ForceSpec::Spring { edge, k, l0, b } => {
                let endpoints = scene.edge(edge);
                scene.insert_force(Box::new(Spring::with_damping(endpoints, k, l0, b)));
            }
            ForceSpec::Gravitational { i, j, g } => {
                scene.insert_force(Box::new(GravitationalAttraction::new((i, j), g)));
            }
            ForceSpec::Drag { b } => {
                scene.insert_force(Box::new(Drag::new(b)));
            }
        }
    }

    Ok(BuiltScene {
        scene,
        stepper: description.integrator.build(),
        dt: description.integrator.dt,
        duration: description.duration,
    })
}
