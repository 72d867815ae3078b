//! Integration tests for mote-stepper.

use mote_forces::{SimpleGravity, Spring};
use mote_math::DVec2;
use mote_scene::Scene;
use mote_stepper::{
    ExplicitEuler, ImplicitEuler, IntegratorKind, LinearizedImplicitEuler, SceneStepper,
    SemiImplicitEuler, StepperConfig,
};

/// Two unit-mass particles at (0, 0) and (0, -1) under gravity (0, -9.8).
fn falling_pair() -> Scene {
    let mut scene = Scene::with_particles(2);
    scene.set_mass(0, 1.0);
    scene.set_mass(1, 1.0);
    scene.set_position(0, DVec2::new(0.0, 0.0));
    scene.set_position(1, DVec2::new(0.0, -1.0));
    scene.insert_force(Box::new(SimpleGravity::new(DVec2::new(0.0, -9.8))));
    scene
}

/// Two unit-mass particles joined by a stretched spring, initially at rest.
fn stretched_spring(stiffness: f64) -> Scene {
    let mut scene = Scene::with_particles(2);
    scene.set_mass(0, 1.0);
    scene.set_mass(1, 1.0);
    scene.set_position(0, DVec2::new(0.0, 0.0));
    scene.set_position(1, DVec2::new(1.5, 0.0));
    scene.insert_force(Box::new(Spring::new((0, 1), stiffness, 1.0)));
    scene
}

// ─── Explicit Euler Tests ─────────────────────────────────────

#[test]
fn explicit_euler_gravity_oracle() {
    let mut scene = falling_pair();
    let report = ExplicitEuler::new().step_scene(&mut scene, 0.01).unwrap();

    assert!(report.converged);
    assert_eq!(report.iterations, 0);

    for i in 0..2 {
        let v = scene.velocity(i);
        assert!(v.x.abs() < 1e-15);
        assert!(
            (v.y - (-0.098)).abs() < 1e-12,
            "v{i}.y = {}, expected -0.098",
            v.y
        );
    }
    let p0 = scene.position(0);
    assert!(
        (p0.y - (-0.00098)).abs() < 1e-12,
        "p0.y = {}, expected -0.00098",
        p0.y
    );
    let p1 = scene.position(1);
    assert!((p1.y - (-1.00098)).abs() < 1e-12);
}

#[test]
fn explicit_euler_is_deterministic() {
    let scene_a = falling_pair();
    let mut scene_b = scene_a.clone();
    let mut scene_a = scene_a;

    ExplicitEuler::new().step_scene(&mut scene_a, 0.01).unwrap();
    ExplicitEuler::new().step_scene(&mut scene_b, 0.01).unwrap();

    assert_eq!(scene_a.positions(), scene_b.positions());
    assert_eq!(scene_a.velocities(), scene_b.velocities());
}

#[test]
fn explicit_euler_spring_pulls_endpoints_inward() {
    let mut scene = stretched_spring(100.0);
    ExplicitEuler::new().step_scene(&mut scene, 0.001).unwrap();
    assert!(scene.velocity(0).x > 0.0, "left endpoint accelerates right");
    assert!(scene.velocity(1).x < 0.0, "right endpoint accelerates left");
}

#[test]
fn fixed_flag_is_metadata_only() {
    let mut scene = falling_pair();
    scene.set_fixed(0, true);
    ExplicitEuler::new().step_scene(&mut scene, 0.01).unwrap();
    // The flag is stored but no integrator path consumes it.
    assert!(scene.is_fixed(0));
    assert!(scene.position(0).y < 0.0);
}

#[test]
fn empty_scene_steps_cleanly() {
    let mut scene = Scene::new();
    let report = ExplicitEuler::new().step_scene(&mut scene, 0.01).unwrap();
    assert!(report.converged);
}

// ─── Semi-Implicit Euler Tests ────────────────────────────────

#[test]
fn semi_implicit_matches_explicit_under_constant_gravity() {
    let mut explicit_scene = falling_pair();
    let mut semi_scene = falling_pair();

    ExplicitEuler::new()
        .step_scene(&mut explicit_scene, 0.01)
        .unwrap();
    SemiImplicitEuler::new()
        .step_scene(&mut semi_scene, 0.01)
        .unwrap();

    // A state-independent gradient makes the trial evaluation a no-op.
    assert_eq!(explicit_scene.positions(), semi_scene.positions());
    assert_eq!(explicit_scene.velocities(), semi_scene.velocities());
}

#[test]
fn semi_implicit_differs_from_explicit_on_moving_spring() {
    let mut explicit_scene = stretched_spring(100.0);
    explicit_scene.set_velocity(0, DVec2::new(0.5, 0.0));
    let mut semi_scene = explicit_scene.clone();

    ExplicitEuler::new()
        .step_scene(&mut explicit_scene, 0.01)
        .unwrap();
    SemiImplicitEuler::new()
        .step_scene(&mut semi_scene, 0.01)
        .unwrap();

    let dx = (explicit_scene.velocity(0) - semi_scene.velocity(0)).length();
    assert!(
        dx > 1e-9,
        "advancing the evaluation point must change a position-dependent force"
    );
}

// ─── Implicit Euler Tests ─────────────────────────────────────

#[test]
fn implicit_euler_converges_on_stiff_spring() {
    let mut scene = stretched_spring(1000.0);
    let stepper = ImplicitEuler::new(50, 1e-9);
    let report = stepper.step_scene(&mut scene, 0.01).unwrap();

    assert!(report.converged, "residual = {}", report.final_residual);
    assert!(report.iterations >= 1);
    assert!(report.final_residual < 1e-9);
    assert!(scene.velocity(0).x > 0.0);
    assert!(scene.velocity(1).x < 0.0);
}

#[test]
fn implicit_euler_matches_explicit_under_constant_gravity() {
    let mut implicit_scene = falling_pair();
    let mut explicit_scene = falling_pair();

    ImplicitEuler::new(50, 1e-12)
        .step_scene(&mut implicit_scene, 0.01)
        .unwrap();
    ExplicitEuler::new()
        .step_scene(&mut explicit_scene, 0.01)
        .unwrap();

    // Constant force: backward and forward Euler agree.
    for d in 0..4 {
        assert!(
            (implicit_scene.positions()[d] - explicit_scene.positions()[d]).abs() < 1e-12,
            "position dof {d} diverged"
        );
        assert!(
            (implicit_scene.velocities()[d] - explicit_scene.velocities()[d]).abs() < 1e-12,
            "velocity dof {d} diverged"
        );
    }
}

#[test]
fn implicit_euler_reports_non_convergence_without_panicking() {
    let mut scene = stretched_spring(1000.0);
    let before = scene.positions().to_vec();

    let stepper = ImplicitEuler::new(0, 1e-15);
    let report = stepper.step_scene(&mut scene, 0.01).unwrap();

    assert!(!report.converged);
    assert_eq!(report.iterations, 0);
    assert!(report.final_residual > 0.0);
    // Budget 0 applies the zero-change iterate: at-rest particles stay put.
    assert_eq!(scene.positions(), &before[..]);
}

#[test]
fn implicit_euler_is_deterministic() {
    let scene_a = stretched_spring(500.0);
    let mut scene_b = scene_a.clone();
    let mut scene_a = scene_a;

    let stepper = ImplicitEuler::new(50, 1e-10);
    stepper.step_scene(&mut scene_a, 0.01).unwrap();
    stepper.step_scene(&mut scene_b, 0.01).unwrap();

    assert_eq!(scene_a.positions(), scene_b.positions());
    assert_eq!(scene_a.velocities(), scene_b.velocities());
}

// ─── Linearized Implicit Euler Tests ──────────────────────────

#[test]
fn linearized_implicit_equals_explicit_under_pure_gravity() {
    let mut linearized_scene = falling_pair();
    let mut explicit_scene = falling_pair();

    LinearizedImplicitEuler::new()
        .step_scene(&mut linearized_scene, 0.01)
        .unwrap();
    ExplicitEuler::new()
        .step_scene(&mut explicit_scene, 0.01)
        .unwrap();

    // Zero Hessians reduce the system matrix to M.
    for d in 0..4 {
        assert!(
            (linearized_scene.positions()[d] - explicit_scene.positions()[d]).abs() < 1e-12
        );
        assert!(
            (linearized_scene.velocities()[d] - explicit_scene.velocities()[d]).abs() < 1e-12
        );
    }
}

#[test]
fn linearized_implicit_damps_stiff_spring_response() {
    // One linearized solve must produce a smaller velocity jump than the
    // explicit step on a very stiff spring (the dt²k term grows the
    // diagonal), which is what makes it usable at larger timesteps.
    let mut linearized_scene = stretched_spring(1.0e6);
    let mut explicit_scene = stretched_spring(1.0e6);

    LinearizedImplicitEuler::new()
        .step_scene(&mut linearized_scene, 0.01)
        .unwrap();
    ExplicitEuler::new()
        .step_scene(&mut explicit_scene, 0.01)
        .unwrap();

    let linearized_jump = linearized_scene.velocity(0).length();
    let explicit_jump = explicit_scene.velocity(0).length();
    assert!(
        linearized_jump < explicit_jump,
        "linearized {linearized_jump} vs explicit {explicit_jump}"
    );
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn integrator_kind_serializes_kebab_case() {
    let json = serde_json::to_string(&IntegratorKind::LinearizedImplicitEuler).unwrap();
    assert_eq!(json, "\"linearized-implicit-euler\"");
    let back: IntegratorKind = serde_json::from_str(&json).unwrap();
    assert_eq!(back, IntegratorKind::LinearizedImplicitEuler);
}

#[test]
fn stepper_config_defaults_apply() {
    let config: StepperConfig =
        serde_json::from_str(r#"{ "kind": "implicit-euler", "dt": 0.005 }"#).unwrap();
    assert_eq!(config.kind, IntegratorKind::ImplicitEuler);
    assert_eq!(config.dt, 0.005);
    assert_eq!(
        config.max_iterations,
        mote_types::constants::DEFAULT_MAX_ITERATIONS
    );
}

#[test]
fn built_steppers_report_their_kind_names() {
    for &kind in IntegratorKind::all() {
        let config = StepperConfig {
            kind,
            ..Default::default()
        };
        assert_eq!(config.build().name(), kind.name());
    }
}
