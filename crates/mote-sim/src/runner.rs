//! Simulation runner — executes the step loop and collects metrics.

use std::time::Instant;

use mote_contact::CandidateSet;
use mote_io::SnapshotWriter;
use mote_telemetry::{EventKind, SimulationEvent};
use mote_types::{MoteError, MoteResult};

use crate::context::SimContext;
use crate::metrics::RunSummary;

/// Consecutive non-converged steps tolerated before a run aborts.
const DEFAULT_FAILURE_LIMIT: u32 = 5;

/// Drives a [`SimContext`] through a full run.
///
/// Non-converged steps are accepted, logged, and counted; only a run of
/// consecutive failures aborts, since a single miss at a stiff moment is
/// routine while a persistent one means the timestep is wrong for the
/// scene. A limit of `0` disables the abort entirely.
pub struct SimRunner {
    max_consecutive_failures: u32,
}

impl SimRunner {
    /// Creates a runner with the default failure limit.
    pub fn new() -> Self {
        Self {
            max_consecutive_failures: DEFAULT_FAILURE_LIMIT,
        }
    }

    /// Creates a runner that aborts after `limit` consecutive
    /// non-converged steps, or never when `limit` is `0`.
    pub fn with_failure_limit(limit: u32) -> Self {
        Self {
            max_consecutive_failures: limit,
        }
    }

    /// Runs the context to completion.
    pub fn run(&self, ctx: &mut SimContext) -> MoteResult<RunSummary> {
        self.run_inner(ctx, None)
    }

    /// Runs the context to completion, appending one snapshot frame per
    /// step to `writer`.
    pub fn run_streaming(
        &self,
        ctx: &mut SimContext,
        writer: &mut SnapshotWriter,
    ) -> MoteResult<RunSummary> {
        self.run_inner(ctx, Some(writer))
    }

    fn run_inner(
        &self,
        ctx: &mut SimContext,
        mut snapshots: Option<&mut SnapshotWriter>,
    ) -> MoteResult<RunSummary> {
        let dt = ctx.dt;
        // The epsilon keeps representation error in duration/dt from
        // adding a spurious extra step.
        let steps = ((ctx.duration / dt) - 1.0e-9).ceil().max(0.0) as u32;

        tracing::debug!(
            steps,
            dt,
            integrator = ctx.stepper.name(),
            particles = ctx.scene.num_particles(),
            "starting run"
        );

        let mut step_times: Vec<f64> = Vec::with_capacity(steps as usize);
        let mut total_iterations: u32 = 0;
        let mut non_converged_steps: u32 = 0;
        let mut consecutive_failures: u32 = 0;

        let initial_total_energy = ctx.scene.compute_total_energy();

        let total_start = Instant::now();

        for step in 0..steps {
            ctx.bus.emit(SimulationEvent::new(
                step,
                EventKind::TimestepBegin {
                    sim_time: (step + 1) as f64 * dt,
                },
            ));

            let xs_start = if ctx.detector.is_some() {
                Some(ctx.scene.positions().to_vec())
            } else {
                None
            };

            let step_start = Instant::now();
            let report = ctx.stepper.step_scene(&mut ctx.scene, dt)?;
            let wall_time = step_start.elapsed().as_secs_f64();

            step_times.push(wall_time);
            total_iterations += report.iterations;

            if let (Some(detector), Some(start)) = (&ctx.detector, &xs_start) {
                let mut candidates = CandidateSet::new();
                detector.perform_collision_detection(
                    &ctx.scene,
                    start,
                    ctx.scene.positions(),
                    &mut candidates,
                );
                ctx.bus.emit(SimulationEvent::new(
                    step,
                    EventKind::ContactCandidates {
                        particle_particle: candidates.particle_particle().len() as u32,
                        particle_edge: candidates.particle_edge().len() as u32,
                        particle_half_plane: candidates.particle_half_plane().len() as u32,
                    },
                ));
            }

            ctx.bus.emit(SimulationEvent::new(
                step,
                EventKind::Convergence {
                    iterations: report.iterations,
                    final_residual: report.final_residual,
                    converged: report.converged,
                },
            ));

            if report.converged {
                consecutive_failures = 0;
            } else {
                consecutive_failures += 1;
                non_converged_steps += 1;
                tracing::warn!(
                    step,
                    residual = report.final_residual,
                    consecutive_failures,
                    "integrator did not converge within budget"
                );
                ctx.bus.emit(SimulationEvent::new(
                    step,
                    EventKind::Divergence {
                        consecutive_failures,
                        residual: report.final_residual,
                    },
                ));
                if self.max_consecutive_failures > 0
                    && consecutive_failures >= self.max_consecutive_failures
                {
                    ctx.bus.finalize();
                    return Err(MoteError::SolverDivergence {
                        iterations: report.iterations,
                        residual: report.final_residual,
                    });
                }
            }

            let kinetic = ctx.scene.compute_kinetic_energy();
            let potential = ctx.scene.compute_potential_energy();
            ctx.bus.emit(SimulationEvent::new(
                step,
                EventKind::Energy {
                    kinetic,
                    potential,
                    total: kinetic + potential,
                },
            ));

            if let Some(writer) = snapshots.as_mut() {
                writer.write_frame(&ctx.scene)?;
            }

            ctx.scene.check_consistency();

            ctx.bus.emit(SimulationEvent::new(
                step,
                EventKind::TimestepEnd { wall_time },
            ));
            ctx.bus.flush();
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();
        ctx.bus.finalize();

        let avg_step_time = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let (min_step_time, max_step_time) = if step_times.is_empty() {
            (0.0, 0.0)
        } else {
            (
                step_times.iter().copied().fold(f64::MAX, f64::min),
                step_times.iter().copied().fold(0.0, f64::max),
            )
        };
        let avg_iterations = if steps > 0 {
            total_iterations as f32 / steps as f32
        } else {
            0.0
        };

        let final_kinetic_energy = ctx.scene.compute_kinetic_energy();
        let final_potential_energy = ctx.scene.compute_potential_energy();

        Ok(RunSummary {
            integrator: ctx.stepper.name().to_string(),
            steps,
            total_wall_time,
            avg_step_time,
            min_step_time,
            max_step_time,
            initial_total_energy,
            final_kinetic_energy,
            final_potential_energy,
            final_total_energy: final_kinetic_energy + final_potential_energy,
            avg_iterations,
            non_converged_steps,
            particle_count: ctx.scene.num_particles(),
        })
    }
}

impl Default for SimRunner {
    fn default() -> Self {
        Self::new()
    }
}
