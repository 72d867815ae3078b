//! Scene — particle state, topology, and owned forces.
//!
//! All per-particle vector quantities live in flat interleaved buffers
//! (`[x0, y0, x1, y1, ..]`). Masses are stored duplicated in both slots of a
//! particle's pair so integrators can divide componentwise without
//! re-expanding.
//!
//! Out-of-range indices and size mismatches are programmer errors and panic;
//! recoverable validation belongs to the scene-description loader, which
//! checks everything before any of these methods run.

use mote_forces::Force;
use mote_math::dense::{get2, set2};
use mote_math::{DVec2, Mat};
use mote_types::Scalar;

use crate::half_plane::HalfPlane;

/// Owner of all simulation state: particles, edges, obstacles, forces.
#[derive(Clone, Default)]
pub struct Scene {
    // Interleaved per-particle state, length 2n each.
    x: Vec<Scalar>,
    v: Vec<Scalar>,
    m: Vec<Scalar>,

    // Per-particle metadata, length n each.
    fixed: Vec<bool>,
    radii: Vec<Scalar>,

    // Edge topology, lock-step with per-edge radii.
    edges: Vec<(usize, usize)>,
    edge_radii: Vec<Scalar>,

    half_planes: Vec<HalfPlane>,

    forces: Vec<Box<dyn Force>>,
}

impl Scene {
    /// Creates an empty scene with no particles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scene pre-sized for `n` particles.
    pub fn with_particles(n: usize) -> Self {
        let mut scene = Self::new();
        scene.resize_system(n);
        scene
    }

    // ─── Sizing ───

    /// Number of particles.
    pub fn num_particles(&self) -> usize {
        self.fixed.len()
    }

    /// Number of degrees of freedom (`2 × num_particles`).
    pub fn num_dofs(&self) -> usize {
        self.x.len()
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of half-plane obstacles.
    pub fn num_half_planes(&self) -> usize {
        self.half_planes.len()
    }

    /// Sets the particle count to `n`, reallocating every per-particle
    /// array zero-filled.
    ///
    /// Prior contents are *not* preserved. Edges, half-planes, and forces
    /// are untouched; callers that shrink the system are responsible for
    /// any topology that now dangles.
    pub fn resize_system(&mut self, n: usize) {
        self.x = vec![0.0; 2 * n];
        self.v = vec![0.0; 2 * n];
        self.m = vec![0.0; 2 * n];
        self.fixed = vec![false; n];
        self.radii = vec![0.0; n];
    }

    // ─── Per-particle access ───

    /// Position of particle `i`.
    pub fn position(&self, i: usize) -> DVec2 {
        assert!(i < self.num_particles(), "particle index out of range");
        get2(&self.x, i)
    }

    /// Velocity of particle `i`.
    pub fn velocity(&self, i: usize) -> DVec2 {
        assert!(i < self.num_particles(), "particle index out of range");
        get2(&self.v, i)
    }

    /// Mass of particle `i`.
    pub fn mass(&self, i: usize) -> Scalar {
        assert!(i < self.num_particles(), "particle index out of range");
        self.m[2 * i]
    }

    /// Whether particle `i` is flagged fixed.
    ///
    /// The flag is metadata: no force or integrator in this crate family
    /// special-cases it. Consumers that want to honor it read it here.
    pub fn is_fixed(&self, i: usize) -> bool {
        assert!(i < self.num_particles(), "particle index out of range");
        self.fixed[i]
    }

    /// Collision/render radius of particle `i`.
    pub fn radius(&self, i: usize) -> Scalar {
        assert!(i < self.num_particles(), "particle index out of range");
        self.radii[i]
    }

    pub fn set_position(&mut self, i: usize, p: DVec2) {
        assert!(i < self.num_particles(), "particle index out of range");
        set2(&mut self.x, i, p);
    }

    pub fn set_velocity(&mut self, i: usize, v: DVec2) {
        assert!(i < self.num_particles(), "particle index out of range");
        set2(&mut self.v, i, v);
    }

    /// Sets the mass of particle `i`, writing both interleaved slots.
    pub fn set_mass(&mut self, i: usize, mass: Scalar) {
        assert!(i < self.num_particles(), "particle index out of range");
        self.m[2 * i] = mass;
        self.m[2 * i + 1] = mass;
    }

    pub fn set_fixed(&mut self, i: usize, fixed: bool) {
        assert!(i < self.num_particles(), "particle index out of range");
        self.fixed[i] = fixed;
    }

    pub fn set_radius(&mut self, i: usize, radius: Scalar) {
        assert!(i < self.num_particles(), "particle index out of range");
        self.radii[i] = radius;
    }

    // ─── Bulk state access ───

    /// Interleaved position vector, length `2n`.
    pub fn positions(&self) -> &[Scalar] {
        &self.x
    }

    /// Interleaved velocity vector, length `2n`.
    pub fn velocities(&self) -> &[Scalar] {
        &self.v
    }

    /// Interleaved mass vector, length `2n`, duplicated per pair.
    pub fn masses(&self) -> &[Scalar] {
        &self.m
    }

    pub fn positions_mut(&mut self) -> &mut [Scalar] {
        &mut self.x
    }

    pub fn velocities_mut(&mut self) -> &mut [Scalar] {
        &mut self.v
    }

    /// Splits mutable position/velocity access from the mass view so
    /// integrators can update state in place while dividing by mass.
    pub fn state_mut(&mut self) -> (&mut [Scalar], &mut [Scalar], &[Scalar]) {
        (&mut self.x, &mut self.v, &self.m)
    }

    // ─── Topology ───

    /// Appends an edge with its radius. Duplicate edges are permitted and
    /// contribute independently wherever forces are defined per-edge.
    pub fn insert_edge(&mut self, endpoints: (usize, usize), radius: Scalar) {
        assert!(
            endpoints.0 < self.num_particles(),
            "edge endpoint out of range"
        );
        assert!(
            endpoints.1 < self.num_particles(),
            "edge endpoint out of range"
        );
        assert!(radius > 0.0, "edge radius must be positive");
        self.edges.push(endpoints);
        self.edge_radii.push(radius);
    }

    /// Edge endpoint pairs, lock-step with [`Scene::edge_radii`].
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn edge(&self, e: usize) -> (usize, usize) {
        assert!(e < self.num_edges(), "edge index out of range");
        self.edges[e]
    }

    pub fn edge_radii(&self) -> &[Scalar] {
        &self.edge_radii
    }

    pub fn edge_radius(&self, e: usize) -> Scalar {
        assert!(e < self.num_edges(), "edge index out of range");
        self.edge_radii[e]
    }

    /// Appends a static half-plane obstacle; the normal is normalized.
    pub fn insert_half_plane(&mut self, point: DVec2, normal: DVec2) {
        self.half_planes.push(HalfPlane::new(point, normal));
    }

    pub fn half_planes(&self) -> &[HalfPlane] {
        &self.half_planes
    }

    // ─── Forces ───

    /// Takes ownership of a force. Forces are evaluated in insertion order.
    pub fn insert_force(&mut self, force: Box<dyn Force>) {
        self.forces.push(force);
    }

    /// Read-only view of the owned forces.
    pub fn forces(&self) -> &[Box<dyn Force>] {
        &self.forces
    }

    // ─── Energies ───

    /// `0.5 Σ m_i ‖v_i‖²` over all particles.
    pub fn compute_kinetic_energy(&self) -> Scalar {
        let mut energy = 0.0;
        for i in 0..self.num_particles() {
            energy += 0.5 * self.m[2 * i] * get2(&self.v, i).length_squared();
        }
        energy
    }

    /// Sum of every force's potential energy at the current state.
    pub fn compute_potential_energy(&self) -> Scalar {
        let mut energy = 0.0;
        for force in &self.forces {
            force.add_energy(&self.x, &self.v, &self.m, &mut energy);
        }
        energy
    }

    /// Kinetic plus potential energy.
    pub fn compute_total_energy(&self) -> Scalar {
        self.compute_kinetic_energy() + self.compute_potential_energy()
    }

    // ─── Derivative accumulation ───

    /// Adds `∂U/∂x` into `grad`, evaluated at `(x + dx, v + dv)` when the
    /// displacements are non-empty, else at the stored state.
    ///
    /// `dx` and `dv` must both be empty or both be full state length. The
    /// stored state is never mutated, so integrators may probe trial states
    /// repeatedly.
    pub fn accumulate_grad_u(&self, grad: &mut [Scalar], dx: &[Scalar], dv: &[Scalar]) {
        assert_eq!(grad.len(), self.x.len(), "gradient buffer size mismatch");
        assert_eq!(dx.len(), dv.len(), "dx/dv must agree in size");
        assert!(
            dx.is_empty() || dx.len() == self.x.len(),
            "displacement size mismatch"
        );

        if dx.is_empty() {
            for force in &self.forces {
                force.add_gradient(&self.x, &self.v, &self.m, grad);
            }
        } else {
            let xt = displaced(&self.x, dx);
            let vt = displaced(&self.v, dv);
            for force in &self.forces {
                force.add_gradient(&xt, &vt, &self.m, grad);
            }
        }
    }

    /// Adds `∂²U/∂x²` into `hess` under the same trial-state contract as
    /// [`Scene::accumulate_grad_u`].
    pub fn accumulate_ddudxdx(&self, hess: &mut Mat<f64>, dx: &[Scalar], dv: &[Scalar]) {
        self.check_hessian_contract(hess, dx, dv);

        if dx.is_empty() {
            for force in &self.forces {
                force.add_hess_x(&self.x, &self.v, &self.m, hess);
            }
        } else {
            let xt = displaced(&self.x, dx);
            let vt = displaced(&self.v, dv);
            for force in &self.forces {
                force.add_hess_x(&xt, &vt, &self.m, hess);
            }
        }
    }

    /// Adds `∂(∂U/∂x)/∂v` into `hess` under the same trial-state contract
    /// as [`Scene::accumulate_grad_u`].
    pub fn accumulate_ddudxdv(&self, hess: &mut Mat<f64>, dx: &[Scalar], dv: &[Scalar]) {
        self.check_hessian_contract(hess, dx, dv);

        if dx.is_empty() {
            for force in &self.forces {
                force.add_hess_v(&self.x, &self.v, &self.m, hess);
            }
        } else {
            let xt = displaced(&self.x, dx);
            let vt = displaced(&self.v, dv);
            for force in &self.forces {
                force.add_hess_v(&xt, &vt, &self.m, hess);
            }
        }
    }

    fn check_hessian_contract(&self, hess: &Mat<f64>, dx: &[Scalar], dv: &[Scalar]) {
        assert_eq!(hess.nrows(), self.x.len(), "Hessian row count mismatch");
        assert_eq!(hess.ncols(), self.x.len(), "Hessian column count mismatch");
        assert_eq!(dx.len(), dv.len(), "dx/dv must agree in size");
        assert!(
            dx.is_empty() || dx.len() == self.x.len(),
            "displacement size mismatch"
        );
    }

    // ─── Copy / diagnostics ───

    /// Replaces this scene's state with `other`'s: particle arrays, edges,
    /// half-planes, and a deep clone of the forces.
    pub fn copy_state(&mut self, other: &Scene) {
        self.x.clone_from(&other.x);
        self.v.clone_from(&other.v);
        self.m.clone_from(&other.m);
        self.fixed.clone_from(&other.fixed);
        self.radii.clone_from(&other.radii);
        self.edges.clone_from(&other.edges);
        self.edge_radii.clone_from(&other.edge_radii);
        self.half_planes.clone_from(&other.half_planes);
        self.forces = other.forces.iter().map(|f| f.box_clone()).collect();
    }

    /// Debug-only invariant validation: array sizes agree, masses are
    /// duplicated per pair, edges reference live particles, and no stored
    /// position/velocity/mass value is NaN. Compiles to nothing in release.
    pub fn check_consistency(&self) {
        debug_assert_eq!(self.x.len(), self.v.len());
        debug_assert_eq!(self.x.len(), self.m.len());
        debug_assert_eq!(self.x.len(), 2 * self.fixed.len());
        debug_assert_eq!(self.fixed.len(), self.radii.len());
        debug_assert_eq!(self.edges.len(), self.edge_radii.len());
        for &(i, j) in &self.edges {
            debug_assert!(i < self.num_particles() && j < self.num_particles());
        }
        for i in 0..self.num_particles() {
            debug_assert_eq!(self.m[2 * i], self.m[2 * i + 1]);
        }
        for d in 0..self.x.len() {
            debug_assert!(self.x[d].is_finite(), "non-finite position");
            debug_assert!(self.v[d].is_finite(), "non-finite velocity");
            debug_assert!(self.m[d].is_finite(), "non-finite mass");
        }
    }
}

/// Elementwise `a + d` into a fresh vector.
fn displaced(a: &[Scalar], d: &[Scalar]) -> Vec<Scalar> {
    a.iter().zip(d.iter()).map(|(ai, di)| ai + di).collect()
}
