//! Run metrics — data collected over a completed simulation run.

use serde::{Deserialize, Serialize};

/// Aggregate metrics from one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Integrator name.
    pub integrator: String,
    /// Number of timesteps executed.
    pub steps: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per step (seconds).
    pub avg_step_time: f64,
    /// Minimum step time.
    pub min_step_time: f64,
    /// Maximum step time.
    pub max_step_time: f64,
    /// Total energy before the first step.
    pub initial_total_energy: f64,
    /// Kinetic energy at the final state.
    pub final_kinetic_energy: f64,
    /// Potential energy at the final state.
    pub final_potential_energy: f64,
    /// Kinetic plus potential at the final state.
    pub final_total_energy: f64,
    /// Average Newton iterations per step (0 for direct integrators).
    pub avg_iterations: f32,
    /// Steps that ended without reaching tolerance.
    pub non_converged_steps: u32,
    /// Particle count.
    pub particle_count: usize,
}

impl RunSummary {
    /// Total-energy change over the run, signed.
    pub fn energy_drift(&self) -> f64 {
        self.final_total_energy - self.initial_total_energy
    }

    /// Format as a CSV header row.
    pub fn to_csv_header() -> String {
        "integrator,particle_count,steps,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,initial_total,final_ke,final_pe,final_total,avg_iterations,non_converged_steps".to_string()
    }

    /// Format this summary as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6e},{:.6e},{:.6e},{:.6e},{:.1},{}",
            self.integrator,
            self.particle_count,
            self.steps,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.initial_total_energy,
            self.final_kinetic_energy,
            self.final_potential_energy,
            self.final_total_energy,
            self.avg_iterations,
            self.non_converged_steps,
        )
    }

    /// Format multiple summaries as a complete CSV string.
    pub fn to_csv(summaries: &[RunSummary]) -> String {
        let mut csv = Self::to_csv_header();
        for s in summaries {
            csv.push('\n');
            csv.push_str(&s.to_csv_row());
        }
        csv
    }
}
