//! Mote CLI — headless simulation, validation, and snapshot inspection.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "mote")]
#[command(version, about = "Mote — 2D particle-and-edge physics simulator")]
struct Cli {
    /// Suppress all output below the error level.
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from a scene description file.
    Simulate {
        /// Path to scene description (JSON).
        scene: String,

        /// Output snapshot file, one frame per step.
        #[arg(short, long)]
        output: Option<String>,

        /// Write per-step energy rows to a CSV file.
        #[arg(long)]
        energy_csv: Option<String>,
    },

    /// Validate a scene description file.
    Validate {
        /// Path to scene description (JSON).
        path: String,
    },

    /// Inspect a state snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: String,

        /// Particle count the snapshot was written with.
        #[arg(short, long)]
        particles: usize,

        /// Show one frame (0-indexed) instead of the final one.
        #[arg(short, long)]
        step: Option<u32>,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Simulate {
            scene,
            output,
            energy_csv,
        } => commands::simulate(&scene, output.as_deref(), energy_csv.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Inspect {
            path,
            particles,
            step,
        } => commands::inspect(&path, particles, step),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
