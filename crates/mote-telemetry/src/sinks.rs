//! Pluggable event sinks.
//!
//! Sinks consume events from the bus and process them (buffer in memory,
//! log through `tracing`, append to a CSV file).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use mote_types::MoteResult;

use crate::events::{EventKind, SimulationEvent};

/// Trait for event consumers.
///
/// Implement this to create custom telemetry outputs.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called when the simulation ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// A simple sink that buffers events in a `Vec`.
pub struct VecSink {
    /// Collected events.
    pub events: Vec<SimulationEvent>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.events.push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A vec sink that keeps a shared handle to its buffer, so callers can
/// inspect dispatched events after the sink has been boxed into a bus.
pub struct SharedVecSink {
    events: Arc<Mutex<Vec<SimulationEvent>>>,
}

impl SharedVecSink {
    /// Creates an empty shared sink.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a handle to the shared event buffer.
    pub fn events(&self) -> Arc<Mutex<Vec<SimulationEvent>>> {
        Arc::clone(&self.events)
    }
}

impl Default for SharedVecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for SharedVecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }

    fn name(&self) -> &str {
        "shared_vec_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
pub struct TracingSink {
    /// Minimum log level for events.
    _level: tracing::Level,
}

impl TracingSink {
    /// Creates a new tracing sink at the given log level.
    pub fn new(level: tracing::Level) -> Self {
        Self { _level: level }
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        tracing::info!(
            timestep = event.timestep,
            event = ?event.kind,
            "simulation_event"
        );
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}

/// A sink that appends energy events to a CSV file.
///
/// Columns: `timestep,kinetic,potential,total`. Non-energy events are
/// ignored.
pub struct CsvEnergySink {
    writer: BufWriter<File>,
    write_failed: bool,
}

impl CsvEnergySink {
    /// Creates the CSV file and writes the header row.
    pub fn create(path: &Path) -> MoteResult<Self> {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "timestep,kinetic,potential,total")?;
        Ok(Self {
            writer,
            write_failed: false,
        })
    }

    fn write_row(&mut self, event: &SimulationEvent) -> std::io::Result<()> {
        if let EventKind::Energy {
            kinetic,
            potential,
            total,
        } = event.kind
        {
            writeln!(
                self.writer,
                "{},{:.9e},{:.9e},{:.9e}",
                event.timestep, kinetic, potential, total
            )?;
        }
        Ok(())
    }
}

impl EventSink for CsvEnergySink {
    fn handle(&mut self, event: &SimulationEvent) {
        // A telemetry sink must not abort the run; failures surface once
        // at finalize.
        if self.write_row(event).is_err() {
            self.write_failed = true;
        }
    }

    fn finalize(&mut self) {
        if self.writer.flush().is_err() {
            self.write_failed = true;
        }
        if self.write_failed {
            tracing::warn!("energy CSV sink dropped rows due to write errors");
        }
    }

    fn name(&self) -> &str {
        "csv_energy_sink"
    }
}
