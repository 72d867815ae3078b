//! Integration tests for mote-contact.

use mote_contact::{
    Aabb, AllPairsDetector, CandidateSet, CollisionDetector, DetectionCallback, NullDetector,
    SpatialHashDetector,
};
use mote_math::DVec2;
use mote_scene::Scene;

/// Records every callback invocation verbatim, duplicates included.
#[derive(Default)]
struct Recorder {
    particle_particle: Vec<(usize, usize)>,
    particle_edge: Vec<(usize, usize)>,
    particle_half_plane: Vec<(usize, usize)>,
}

impl DetectionCallback for Recorder {
    fn particle_particle(&mut self, i: usize, j: usize) {
        self.particle_particle.push((i, j));
    }

    fn particle_edge(&mut self, p: usize, e: usize) {
        self.particle_edge.push((p, e));
    }

    fn particle_half_plane(&mut self, p: usize, h: usize) {
        self.particle_half_plane.push((p, h));
    }
}

fn static_sweep(scene: &Scene) -> (Vec<f64>, Vec<f64>) {
    (scene.positions().to_vec(), scene.positions().to_vec())
}

// ─── Aabb Tests ───────────────────────────────────────────────

#[test]
fn swept_box_covers_motion_and_radius() {
    let aabb = Aabb::swept(DVec2::new(1.0, 0.0), DVec2::new(-1.0, 2.0), 0.5);
    assert_eq!(aabb.min, DVec2::new(-1.5, -0.5));
    assert_eq!(aabb.max, DVec2::new(1.5, 2.5));
}

#[test]
fn touching_boxes_overlap() {
    let a = Aabb::swept(DVec2::new(0.0, 0.0), DVec2::new(1.0, 1.0), 0.0);
    let b = Aabb::swept(DVec2::new(1.0, 1.0), DVec2::new(2.0, 2.0), 0.0);
    let c = Aabb::swept(DVec2::new(1.01, 0.0), DVec2::new(2.0, 1.0), 0.0);
    assert!(a.overlaps(&b), "shared corner counts as overlap");
    assert!(b.overlaps(&a));
    assert!(!a.overlaps(&c));
}

// ─── Candidate Set Tests ──────────────────────────────────────

#[test]
fn candidate_set_normalizes_particle_pairs() {
    let mut set = CandidateSet::new();
    DetectionCallback::particle_particle(&mut set, 2, 1);
    DetectionCallback::particle_particle(&mut set, 1, 2);
    assert_eq!(set.len(), 1);
    assert!(set.particle_particle().contains(&(1, 2)));
}

#[test]
fn candidate_set_replays_in_ascending_order() {
    let mut set = CandidateSet::new();
    DetectionCallback::particle_particle(&mut set, 3, 0);
    DetectionCallback::particle_particle(&mut set, 1, 2);
    DetectionCallback::particle_edge(&mut set, 4, 0);

    let mut recorder = Recorder::default();
    set.replay(&mut recorder);
    assert_eq!(recorder.particle_particle, vec![(0, 3), (1, 2)]);
    assert_eq!(recorder.particle_edge, vec![(4, 0)]);
}

#[test]
fn candidate_set_clear_empties_all_categories() {
    let mut set = CandidateSet::new();
    DetectionCallback::particle_particle(&mut set, 0, 1);
    DetectionCallback::particle_edge(&mut set, 2, 0);
    DetectionCallback::particle_half_plane(&mut set, 0, 0);
    assert!(!set.is_empty());
    set.clear();
    assert!(set.is_empty());
}

// ─── All-Pairs Detector Tests ─────────────────────────────────

#[test]
fn overlapping_pair_reported_exactly_once() {
    let mut scene = Scene::with_particles(2);
    scene.set_position(0, DVec2::new(0.0, 0.0));
    scene.set_position(1, DVec2::new(0.15, 0.0));
    scene.set_radius(0, 0.1);
    scene.set_radius(1, 0.1);

    let (start, end) = static_sweep(&scene);
    let mut recorder = Recorder::default();
    AllPairsDetector::new().perform_collision_detection(&scene, &start, &end, &mut recorder);

    assert_eq!(
        recorder.particle_particle,
        vec![(0, 1)],
        "one unordered pair, one report"
    );
}

#[test]
fn distant_pair_not_reported() {
    let mut scene = Scene::with_particles(2);
    scene.set_position(0, DVec2::new(0.0, 0.0));
    scene.set_position(1, DVec2::new(10.0, 0.0));
    scene.set_radius(0, 0.1);
    scene.set_radius(1, 0.1);

    let (start, end) = static_sweep(&scene);
    let mut recorder = Recorder::default();
    AllPairsDetector::new().perform_collision_detection(&scene, &start, &end, &mut recorder);

    assert!(recorder.particle_particle.is_empty());
}

#[test]
fn sweep_motion_is_covered() {
    let mut scene = Scene::with_particles(2);
    scene.set_position(0, DVec2::new(0.0, 0.0));
    scene.set_position(1, DVec2::new(1.0, 0.15));
    scene.set_radius(0, 0.1);
    scene.set_radius(1, 0.1);

    // Particle 0 crosses beneath particle 1 during the step.
    let start = scene.positions().to_vec();
    let mut end = start.clone();
    end[0] = 2.0;

    let static_pairs = {
        let mut recorder = Recorder::default();
        AllPairsDetector::new().perform_collision_detection(&scene, &start, &start, &mut recorder);
        recorder.particle_particle
    };
    assert!(
        static_pairs.is_empty(),
        "start positions alone must not trigger"
    );

    let mut recorder = Recorder::default();
    AllPairsDetector::new().perform_collision_detection(&scene, &start, &end, &mut recorder);
    assert_eq!(recorder.particle_particle, vec![(0, 1)]);
}

#[test]
fn edge_candidates_skip_endpoints() {
    let mut scene = Scene::with_particles(3);
    scene.set_position(0, DVec2::new(0.0, 0.0));
    scene.set_position(1, DVec2::new(1.0, 0.0));
    scene.set_position(2, DVec2::new(0.5, 0.1));
    scene.set_radius(2, 0.1);
    scene.insert_edge((0, 1), 0.05);

    let (start, end) = static_sweep(&scene);
    let mut recorder = Recorder::default();
    AllPairsDetector::new().perform_collision_detection(&scene, &start, &end, &mut recorder);

    assert_eq!(recorder.particle_edge, vec![(2, 0)]);
}

#[test]
fn half_plane_detects_at_sweep_endpoint() {
    let mut scene = Scene::with_particles(2);
    scene.set_position(0, DVec2::new(0.0, 1.0));
    scene.set_position(1, DVec2::new(0.0, 2.0));
    scene.set_radius(0, 0.1);
    scene.set_radius(1, 0.1);
    scene.insert_half_plane(DVec2::new(0.0, 0.0), DVec2::new(0.0, 1.0));

    // Particle 0 descends into range; particle 1 stays clear.
    let start = scene.positions().to_vec();
    let mut end = start.clone();
    end[1] = 0.05;

    let mut recorder = Recorder::default();
    AllPairsDetector::new().perform_collision_detection(&scene, &start, &end, &mut recorder);

    assert_eq!(recorder.particle_half_plane, vec![(0, 0)]);
}

// ─── Spatial Hash Detector Tests ──────────────────────────────

#[test]
fn spatial_hash_matches_all_pairs_on_cluster() {
    // 5×5 grid, spacing tight enough that neighbors and diagonals touch.
    let mut scene = Scene::with_particles(25);
    for row in 0..5 {
        for col in 0..5 {
            let i = row * 5 + col;
            scene.set_position(i, DVec2::new(col as f64 * 0.18, row as f64 * 0.18));
            scene.set_radius(i, 0.1);
        }
    }
    scene.insert_edge((0, 1), 0.05);
    scene.insert_edge((7, 12), 0.05);
    scene.insert_half_plane(DVec2::new(0.0, 0.0), DVec2::new(0.0, 1.0));

    let (start, end) = static_sweep(&scene);

    let mut brute = CandidateSet::new();
    AllPairsDetector::new().perform_collision_detection(&scene, &start, &end, &mut brute);

    let mut hashed = CandidateSet::new();
    SpatialHashDetector::new(0.4).perform_collision_detection(&scene, &start, &end, &mut hashed);

    assert!(!brute.is_empty());
    assert_eq!(hashed, brute, "grid must reproduce the brute-force sets");
}

#[test]
fn spatial_hash_deduplicates_multi_cell_spans() {
    let mut scene = Scene::with_particles(2);
    scene.set_position(0, DVec2::new(0.0, 0.0));
    scene.set_position(1, DVec2::new(0.3, 0.0));
    scene.set_radius(0, 0.5);
    scene.set_radius(1, 0.1);

    let (start, end) = static_sweep(&scene);
    let mut recorder = Recorder::default();
    // Cells far smaller than the boxes: the pair shares many bins.
    SpatialHashDetector::new(0.1).perform_collision_detection(&scene, &start, &end, &mut recorder);

    assert_eq!(recorder.particle_particle, vec![(0, 1)]);
}

// ─── Null Detector Tests ──────────────────────────────────────

#[test]
fn null_detector_reports_nothing() {
    let mut scene = Scene::with_particles(2);
    scene.set_radius(0, 10.0);
    scene.set_radius(1, 10.0);

    let (start, end) = static_sweep(&scene);
    let mut recorder = Recorder::default();
    NullDetector.perform_collision_detection(&scene, &start, &end, &mut recorder);

    assert!(recorder.particle_particle.is_empty());
    assert!(recorder.particle_edge.is_empty());
    assert!(recorder.particle_half_plane.is_empty());
}

#[test]
fn detector_names_are_stable() {
    assert_eq!(AllPairsDetector::new().name(), "all-pairs");
    assert_eq!(SpatialHashDetector::default().name(), "spatial-hash");
    assert_eq!(NullDetector.name(), "null-detector");
}
