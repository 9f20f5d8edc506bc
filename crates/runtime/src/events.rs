use serde::Serialize;
use strategy::Action;

/// One row of the run trajectory, captured after the decision step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickRecord {
    pub t: u64,
    pub external_px: f64,
    pub market_px: f64,
    pub divergence: f64,
    pub action: Action,
    pub equity: f64,
    pub realized_pnl: f64,
    pub position: f64,
    pub halted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Completed,
    Halted,
}
