//! CLI command implementations.

use std::path::Path;

use mote_contact::SpatialHashDetector;
use mote_io::builder::build_scene;
use mote_io::contract::SceneDescription;
use mote_io::snapshot::{SnapshotReader, SnapshotWriter};
use mote_io::validator::validate_description;
use mote_scene::Scene;
use mote_sim::{SimContext, SimRunner};
use mote_telemetry::sinks::CsvEnergySink;

/// Run a simulation from a scene description file.
pub fn simulate(
    scene_path: &str,
    output_path: Option<&str>,
    energy_csv_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Mote Simulation");
    println!("───────────────");

    let description = SceneDescription::from_path(Path::new(scene_path))?;
    let built = build_scene(&description)?;

    if let Some(name) = &description.name {
        println!("Name:       {name}");
    }
    println!("Scene:      {scene_path}");
    println!("Particles:  {}", built.scene.num_particles());
    println!("Edges:      {}", built.scene.num_edges());
    println!("Forces:     {}", built.scene.forces().len());
    println!("Integrator: {} (dt = {})", built.stepper.name(), built.dt);
    println!("Duration:   {}s", built.duration);
    println!();

    let mut ctx =
        SimContext::from_built(built).with_detector(Box::new(SpatialHashDetector::default()));

    if let Some(path) = energy_csv_path {
        ctx.bus
            .add_sink(Box::new(CsvEnergySink::create(Path::new(path))?));
    }

    let runner = SimRunner::new();
    let summary = if let Some(path) = output_path {
        let mut writer = SnapshotWriter::create(Path::new(path))?;
        let summary = runner.run_streaming(&mut ctx, &mut writer)?;
        writer.finish()?;
        println!("Snapshots written to: {path}");
        summary
    } else {
        runner.run(&mut ctx)?
    };

    println!("  Steps:          {}", summary.steps);
    println!("  Wall time:      {:.3}s", summary.total_wall_time);
    println!("  Avg step:       {:.3}ms", summary.avg_step_time * 1000.0);
    println!("  Final KE:       {:.6e}", summary.final_kinetic_energy);
    println!("  Final total E:  {:.6e}", summary.final_total_energy);
    println!("  Energy drift:   {:+.6e}", summary.energy_drift());
    if summary.non_converged_steps > 0 {
        println!("  Non-converged:  {}", summary.non_converged_steps);
    }
    if let Some(path) = energy_csv_path {
        println!("  Energy CSV:     {path}");
    }

    Ok(())
}

/// Validate a scene description.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Mote Validator");
    println!("──────────────");

    let description = SceneDescription::from_path(Path::new(path))?;
    validate_description(&description)?;

    println!(
        "✅ Scene is valid ({} particles, {} edges, {} half-planes, {} forces).",
        description.particles.len(),
        description.edges.len(),
        description.half_planes.len(),
        description.forces.len(),
    );
    Ok(())
}

/// Inspect a state snapshot file.
pub fn inspect(
    path: &str,
    particles: usize,
    step: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Mote Snapshot Inspector");
    println!("───────────────────────");

    let mut scene = Scene::with_particles(particles);
    let mut reader = SnapshotReader::open(Path::new(path))?;

    let mut frames: u32 = 0;
    let mut shown = false;
    while reader.next_frame(&mut scene)? {
        frames += 1;
        if step == Some(frames - 1) {
            print_frame_stats(frames - 1, &scene);
            shown = true;
        }
    }

    println!("Frames:    {frames}");
    println!("Particles: {particles}");

    if let Some(wanted) = step {
        if !shown {
            return Err(format!("snapshot has only {frames} frames, wanted {wanted}").into());
        }
    } else if frames > 0 {
        // Default to the final frame; the loop leaves it in the scene.
        print_frame_stats(frames - 1, &scene);
    }

    Ok(())
}

fn print_frame_stats(frame: u32, scene: &Scene) {
    let range = |values: &[f64], offset: usize| {
        values
            .iter()
            .skip(offset)
            .step_by(2)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    };

    let (min_x, max_x) = range(scene.positions(), 0);
    let (min_y, max_y) = range(scene.positions(), 1);
    let max_speed = (0..scene.num_particles())
        .map(|i| scene.velocity(i).length())
        .fold(0.0, f64::max);

    println!("Frame {frame}:");
    println!("  X range:   [{min_x:.4}, {max_x:.4}]");
    println!("  Y range:   [{min_y:.4}, {max_y:.4}]");
    println!("  Max speed: {max_speed:.4}");
}
