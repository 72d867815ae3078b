//! Integration tests for mote-scene.

use mote_forces::{Drag, SimpleGravity, Spring};
use mote_math::{DVec2, Mat};
use mote_scene::Scene;

fn gravity_scene(n: usize, g: DVec2) -> Scene {
    let mut scene = Scene::with_particles(n);
    for i in 0..n {
        scene.set_mass(i, 1.0);
    }
    scene.insert_force(Box::new(SimpleGravity::new(g)));
    scene
}

// ─── Sizing Tests ─────────────────────────────────────────────

#[test]
fn resize_system_sets_all_lengths() {
    let mut scene = Scene::new();
    assert_eq!(scene.num_particles(), 0);
    for n in [0usize, 1, 5, 64] {
        scene.resize_system(n);
        assert_eq!(scene.num_particles(), n);
        assert_eq!(scene.num_dofs(), 2 * n);
        assert_eq!(scene.positions().len(), 2 * n);
        assert_eq!(scene.velocities().len(), 2 * n);
        assert_eq!(scene.masses().len(), 2 * n);
    }
}

#[test]
fn resize_system_does_not_preserve_contents() {
    let mut scene = Scene::with_particles(2);
    scene.set_position(1, DVec2::new(3.0, 4.0));
    scene.resize_system(2);
    assert_eq!(scene.position(1), DVec2::ZERO);
}

// ─── Setter Tests ─────────────────────────────────────────────

#[test]
fn set_mass_writes_both_slots() {
    let mut scene = Scene::with_particles(3);
    scene.set_mass(1, 2.5);
    assert_eq!(scene.masses()[2], 2.5);
    assert_eq!(scene.masses()[3], 2.5);
    assert_eq!(scene.mass(1), 2.5);
    assert_eq!(scene.masses()[0], 0.0, "other particles untouched");
}

#[test]
fn setters_round_trip() {
    let mut scene = Scene::with_particles(2);
    scene.set_position(0, DVec2::new(1.0, -2.0));
    scene.set_velocity(0, DVec2::new(0.5, 0.25));
    scene.set_fixed(0, true);
    scene.set_radius(0, 0.2);
    assert_eq!(scene.position(0), DVec2::new(1.0, -2.0));
    assert_eq!(scene.velocity(0), DVec2::new(0.5, 0.25));
    assert!(scene.is_fixed(0));
    assert!(!scene.is_fixed(1));
    assert_eq!(scene.radius(0), 0.2);
}

#[test]
#[should_panic(expected = "particle index out of range")]
fn set_position_out_of_range_panics() {
    let mut scene = Scene::with_particles(2);
    scene.set_position(2, DVec2::ZERO);
}

// ─── Edge Tests ───────────────────────────────────────────────

#[test]
fn insert_edge_keeps_radii_in_lock_step() {
    let mut scene = Scene::with_particles(3);
    scene.insert_edge((0, 1), 0.1);
    scene.insert_edge((1, 2), 0.2);
    assert_eq!(scene.num_edges(), 2);
    assert_eq!(scene.edges(), &[(0, 1), (1, 2)]);
    assert_eq!(scene.edge_radii(), &[0.1, 0.2]);
    assert_eq!(scene.edge(1), (1, 2));
    assert_eq!(scene.edge_radius(1), 0.2);
}

#[test]
fn duplicate_edges_are_permitted() {
    let mut scene = Scene::with_particles(2);
    scene.insert_edge((0, 1), 0.1);
    scene.insert_edge((0, 1), 0.1);
    scene.insert_edge((1, 0), 0.1);
    assert_eq!(scene.num_edges(), 3);
}

#[test]
#[should_panic(expected = "edge endpoint out of range")]
fn insert_edge_out_of_range_panics() {
    let mut scene = Scene::with_particles(2);
    scene.insert_edge((0, 2), 0.1);
}

#[test]
#[should_panic(expected = "edge radius must be positive")]
fn insert_edge_zero_radius_panics() {
    let mut scene = Scene::with_particles(2);
    scene.insert_edge((0, 1), 0.0);
}

// ─── Half-Plane Tests ─────────────────────────────────────────

#[test]
fn insert_half_plane_normalizes() {
    let mut scene = Scene::with_particles(1);
    scene.insert_half_plane(DVec2::new(0.0, -1.0), DVec2::new(0.0, 3.0));
    assert_eq!(scene.num_half_planes(), 1);
    let hp = scene.half_planes()[0];
    assert_eq!(hp.normal, DVec2::new(0.0, 1.0));
    assert!((hp.signed_distance(DVec2::new(5.0, 1.0)) - 2.0).abs() < 1e-12);
    assert!(hp.signed_distance(DVec2::new(0.0, -2.0)) < 0.0);
}

// ─── Energy Tests ─────────────────────────────────────────────

#[test]
fn kinetic_energy_formula() {
    let mut scene = Scene::with_particles(2);
    scene.set_mass(0, 2.0);
    scene.set_mass(1, 3.0);
    scene.set_velocity(0, DVec2::new(1.0, 2.0));
    scene.set_velocity(1, DVec2::new(-1.0, 0.5));
    // 0.5*2*(1+4) + 0.5*3*(1+0.25) = 5 + 1.875
    assert!((scene.compute_kinetic_energy() - 6.875).abs() < 1e-12);
}

#[test]
fn potential_energy_sums_forces() {
    let mut scene = gravity_scene(1, DVec2::new(0.0, -10.0));
    scene.set_position(0, DVec2::new(0.0, 2.0));
    // Two identical gravities accumulate independently.
    scene.insert_force(Box::new(SimpleGravity::new(DVec2::new(0.0, -10.0))));
    assert!((scene.compute_potential_energy() - 40.0).abs() < 1e-12);
    assert!((scene.compute_total_energy() - 40.0).abs() < 1e-12);
}

// ─── Accumulation Tests ───────────────────────────────────────

#[test]
fn gradient_accumulates_across_forces() {
    let mut scene = gravity_scene(1, DVec2::new(0.0, -10.0));
    scene.insert_force(Box::new(Drag::new(2.0)));
    scene.set_velocity(0, DVec2::new(1.0, 0.0));

    let mut grad = vec![0.0; 2];
    scene.accumulate_grad_u(&mut grad, &[], &[]);
    // gravity: (0, +10); drag: (2, 0)
    assert!((grad[0] - 2.0).abs() < 1e-12);
    assert!((grad[1] - 10.0).abs() < 1e-12);
}

#[test]
fn trial_state_gradient_matches_displaced_scene() {
    let mut scene = Scene::with_particles(2);
    scene.set_mass(0, 1.0);
    scene.set_mass(1, 1.0);
    scene.set_position(0, DVec2::new(0.0, 0.0));
    scene.set_position(1, DVec2::new(1.5, 0.0));
    scene.insert_force(Box::new(Spring::with_damping((0, 1), 30.0, 1.0, 0.5)));

    let dx = [0.1, -0.2, 0.05, 0.3];
    let dv = [0.4, 0.0, -0.1, 0.2];

    let mut trial_grad = vec![0.0; 4];
    scene.accumulate_grad_u(&mut trial_grad, &dx, &dv);

    // The stored state must be untouched by the trial query.
    assert_eq!(scene.position(0), DVec2::ZERO);
    assert_eq!(scene.velocity(1), DVec2::ZERO);

    // A scene actually moved to the trial state reports the same gradient.
    let mut moved = scene.clone();
    moved.set_position(0, DVec2::new(0.1, -0.2));
    moved.set_position(1, DVec2::new(1.55, 0.3));
    moved.set_velocity(0, DVec2::new(0.4, 0.0));
    moved.set_velocity(1, DVec2::new(-0.1, 0.2));
    let mut moved_grad = vec![0.0; 4];
    moved.accumulate_grad_u(&mut moved_grad, &[], &[]);

    for d in 0..4 {
        assert!(
            (trial_grad[d] - moved_grad[d]).abs() < 1e-12,
            "trial[{d}] = {}, moved[{d}] = {}",
            trial_grad[d],
            moved_grad[d]
        );
    }
}

#[test]
fn trial_state_hessians_match_displaced_scene() {
    let mut scene = Scene::with_particles(2);
    scene.set_mass(0, 1.0);
    scene.set_mass(1, 1.0);
    scene.set_position(1, DVec2::new(2.0, 0.0));
    scene.insert_force(Box::new(Spring::with_damping((0, 1), 30.0, 1.0, 0.5)));

    let dx = [0.0, 0.1, -0.1, 0.0];
    let dv = [0.2, 0.0, 0.0, -0.2];

    let mut trial_hx: Mat<f64> = Mat::zeros(4, 4);
    let mut trial_hv: Mat<f64> = Mat::zeros(4, 4);
    scene.accumulate_ddudxdx(&mut trial_hx, &dx, &dv);
    scene.accumulate_ddudxdv(&mut trial_hv, &dx, &dv);

    let mut moved = scene.clone();
    moved.set_position(0, DVec2::new(0.0, 0.1));
    moved.set_position(1, DVec2::new(1.9, 0.0));
    moved.set_velocity(0, DVec2::new(0.2, 0.0));
    moved.set_velocity(1, DVec2::new(0.0, -0.2));
    let mut moved_hx: Mat<f64> = Mat::zeros(4, 4);
    let mut moved_hv: Mat<f64> = Mat::zeros(4, 4);
    moved.accumulate_ddudxdx(&mut moved_hx, &[], &[]);
    moved.accumulate_ddudxdv(&mut moved_hv, &[], &[]);

    for r in 0..4 {
        for c in 0..4 {
            assert!((trial_hx[(r, c)] - moved_hx[(r, c)]).abs() < 1e-12);
            assert!((trial_hv[(r, c)] - moved_hv[(r, c)]).abs() < 1e-12);
        }
    }
}

#[test]
#[should_panic(expected = "dx/dv must agree in size")]
fn mismatched_displacements_panic() {
    let scene = gravity_scene(1, DVec2::new(0.0, -9.8));
    let mut grad = vec![0.0; 2];
    scene.accumulate_grad_u(&mut grad, &[0.0, 0.0], &[]);
}

// ─── Copy Tests ───────────────────────────────────────────────

#[test]
fn copy_state_replaces_everything() {
    let mut source = Scene::with_particles(2);
    source.set_mass(0, 1.0);
    source.set_mass(1, 2.0);
    source.set_position(1, DVec2::new(1.0, 1.0));
    source.insert_edge((0, 1), 0.1);
    source.insert_half_plane(DVec2::ZERO, DVec2::new(0.0, 1.0));
    source.insert_force(Box::new(SimpleGravity::new(DVec2::new(0.0, -9.8))));

    let mut target = Scene::with_particles(5);
    target.copy_state(&source);

    assert_eq!(target.num_particles(), 2);
    assert_eq!(target.num_edges(), 1);
    assert_eq!(target.num_half_planes(), 1);
    assert_eq!(target.forces().len(), 1);
    assert_eq!(target.position(1), DVec2::new(1.0, 1.0));
    assert_eq!(target.mass(1), 2.0);
}

#[test]
fn copy_state_deep_clones_forces() {
    let mut source = Scene::with_particles(1);
    source.set_mass(0, 1.0);
    source.set_position(0, DVec2::new(0.0, 1.0));
    source.insert_force(Box::new(SimpleGravity::new(DVec2::new(0.0, -10.0))));

    let mut copy = Scene::new();
    copy.copy_state(&source);

    // Mutating the source's particle state must not leak into the copy,
    // and the copy must evaluate its own force list.
    source.set_position(0, DVec2::new(0.0, 100.0));
    assert_eq!(copy.position(0), DVec2::new(0.0, 1.0));
    assert!((copy.compute_potential_energy() - 10.0).abs() < 1e-12);
}

#[test]
fn check_consistency_accepts_valid_scene() {
    let mut scene = gravity_scene(3, DVec2::new(0.0, -9.8));
    scene.insert_edge((0, 2), 0.05);
    scene.check_consistency();
}
