use core_sim::{SimConfig, STARTING_CAPITAL};

/// True once cumulative realized loss reaches the daily cap, measured against
/// starting capital rather than current equity.
pub fn loss_cap_breached(realized_pnl: f64, config: &SimConfig) -> bool {
    realized_pnl / STARTING_CAPITAL <= -config.daily_loss_cap_pct
}
