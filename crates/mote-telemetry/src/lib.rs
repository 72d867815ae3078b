//! # mote-telemetry
//!
//! Event bus for simulation telemetry. The runner emits structured
//! events (timing, energy, convergence, contact candidates) that can be
//! consumed by pluggable sinks (in-memory buffers, tracing, CSV files).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{CsvEnergySink, EventSink, SharedVecSink, TracingSink, VecSink};
