//! Scene description validation.
//!
//! Validates descriptions before the scene builder runs, catching
//! data-level errors early with clear diagnostics. Everything the core
//! treats as a fatal precondition (index ranges, positivity) is checked
//! here first, so malformed input surfaces as a recoverable error
//! instead of a panic.

use mote_types::{MoteError, MoteResult};

use crate::contract::{ForceSpec, SceneDescription};

/// Validates a complete scene description.
///
/// Checks:
/// - Particle state is finite, masses positive, radii non-negative
/// - Edge endpoints are in range and distinct, edge radii positive
/// - Half-plane normals are nonzero and finite
/// - Force parameters reference valid particles/edges
/// - Integrator parameters are physically reasonable
pub fn validate_description(description: &SceneDescription) -> MoteResult<()> {
    let n = description.particles.len();

    for (i, p) in description.particles.iter().enumerate() {
        let state = [p.px, p.py, p.vx, p.vy, p.m, p.radius];
        if state.iter().any(|v| !v.is_finite()) {
            return Err(MoteError::InvalidScene(format!(
                "Particle {i}: non-finite state value"
            )));
        }
        if p.m <= 0.0 {
            return Err(MoteError::InvalidScene(format!(
                "Particle {i}: mass must be positive, got {}",
                p.m
            )));
        }
        if p.radius < 0.0 {
            return Err(MoteError::InvalidScene(format!(
                "Particle {i}: radius must be non-negative, got {}",
                p.radius
            )));
        }
    }

    for (e, edge) in description.edges.iter().enumerate() {
        if edge.i >= n || edge.j >= n {
            return Err(MoteError::InvalidScene(format!(
                "Edge {e}: endpoint ({}, {}) out of range for {} particles",
                edge.i, edge.j, n
            )));
        }
        if edge.i == edge.j {
            return Err(MoteError::InvalidScene(format!(
                "Edge {e}: endpoints must differ, got ({}, {})",
                edge.i, edge.j
            )));
        }
        if !(edge.radius > 0.0 && edge.radius.is_finite()) {
            return Err(MoteError::InvalidScene(format!(
                "Edge {e}: radius must be positive, got {}",
                edge.radius
            )));
        }
    }

    for (h, plane) in description.half_planes.iter().enumerate() {
        let values = [plane.px, plane.py, plane.nx, plane.ny];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(MoteError::InvalidScene(format!(
                "Half-plane {h}: non-finite value"
            )));
        }
        if plane.nx == 0.0 && plane.ny == 0.0 {
            return Err(MoteError::InvalidScene(format!(
                "Half-plane {h}: normal must be nonzero"
            )));
        }
    }

    for (f, force) in description.forces.iter().enumerate() {
        validate_force(f, force, description)?;
    }

    validate_run_params(description)?;

    Ok(())
}

fn validate_force(f: usize, force: &ForceSpec, description: &SceneDescription) -> MoteResult<()> {
    let n = description.particles.len();
    match *force {
        ForceSpec::SimpleGravity { fx, fy } => {
            if !fx.is_finite() || !fy.is_finite() {
                return Err(MoteError::InvalidScene(format!(
                    "Force {f}: gravity vector must be finite"
                )));
            }
        }
        ForceSpec::Spring { edge, k, l0, b } => {
            if edge >= description.edges.len() {
                return Err(MoteError::InvalidScene(format!(
                    "Force {f}: spring edge {edge} out of range for {} edges",
                    description.edges.len()
                )));
            }
            if !(k >= 0.0 && k.is_finite()) {
                return Err(MoteError::InvalidScene(format!(
                    "Force {f}: spring stiffness must be non-negative, got {k}"
                )));
            }
            if !(l0 >= 0.0 && l0.is_finite()) {
                return Err(MoteError::InvalidScene(format!(
                    "Force {f}: spring rest length must be non-negative, got {l0}"
                )));
            }
            if !(b >= 0.0 && b.is_finite()) {
                return Err(MoteError::InvalidScene(format!(
                    "Force {f}: spring damping must be non-negative, got {b}"
                )));
            }
        }
        ForceSpec::Gravitational { i, j, g } => {
            if i >= n || j >= n {
                return Err(MoteError::InvalidScene(format!(
                    "Force {f}: attraction pair ({i}, {j}) out of range for {n} particles"
                )));
            }
            if i == j {
                return Err(MoteError::InvalidScene(format!(
                    "Force {f}: attraction pair must name two distinct particles"
                )));
            }
            if !(g >= 0.0 && g.is_finite()) {
                return Err(MoteError::InvalidScene(format!(
                    "Force {f}: attraction strength must be non-negative, got {g}"
                )));
            }
        }
        ForceSpec::Drag { b } => {
            if !(b >= 0.0 && b.is_finite()) {
                return Err(MoteError::InvalidScene(format!(
                    "Force {f}: drag coefficient must be non-negative, got {b}"
                )));
            }
        }
    }
    Ok(())
}

fn validate_run_params(description: &SceneDescription) -> MoteResult<()> {
    let integrator = &description.integrator;
    if !(integrator.dt > 0.0 && integrator.dt.is_finite()) {
        return Err(MoteError::InvalidConfig(
            "Timestep dt must be positive".into(),
        ));
    }
    if integrator.dt > 1.0 {
        return Err(MoteError::InvalidConfig(
            "Timestep dt > 1.0 is unreasonably large".into(),
        ));
    }
    if integrator.max_iterations == 0 {
        return Err(MoteError::InvalidConfig(
            "Solver iterations must be >= 1".into(),
        ));
    }
    if !(integrator.tolerance > 0.0 && integrator.tolerance.is_finite()) {
        return Err(MoteError::InvalidConfig(
            "Solver tolerance must be positive".into(),
        ));
    }
    if !(description.duration > 0.0 && description.duration.is_finite()) {
        return Err(MoteError::InvalidConfig(
            "Duration must be positive".into(),
        ));
    }
    Ok(())
}
