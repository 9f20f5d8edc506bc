pub mod benchmark;
pub mod engine;
pub mod events;
pub mod logging;
pub mod metrics;
pub mod replay;
pub mod summary;

pub use engine::{RunOutcome, RunRequest, SimEngine, DEFAULT_INITIAL_PRICE};
pub use events::{RunStatus, TickRecord};
pub use summary::RunSummary;

/// Throughput the driver is expected to sustain on a single core.
pub const TARGET_TICKS_PER_SEC: u64 = 1_000_000;
