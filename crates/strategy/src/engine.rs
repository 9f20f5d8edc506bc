use core_sim::{SimConfig, SimState};

use crate::divergence::{divergence, exceeds_threshold, side_for, Action};
use crate::risk::loss_cap_breached;
use crate::sizing::size_trade;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub action: Action,
    /// Divergence that drove a trade; `0.0` on `hold` and `halted`.
    pub divergence: f64,
    /// P&L realized by closing an opposite-side position on this call, if any.
    pub closed_pnl: Option<f64>,
}

impl Decision {
    fn idle(action: Action) -> Self {
        Self {
            action,
            divergence: 0.0,
            closed_pnl: None,
        }
    }
}

/// Runs one decision/risk step against `state`.
///
/// `state` is left untouched when the engine is halted or the divergence is
/// inside the threshold band. Otherwise it is mutated in place: an
/// opposite-side position is closed first, a new micro position on the
/// divergence side is opened (adding to any same-side position), equity is
/// marked, and the daily loss cap is checked. A breach sets `halted` without
/// rolling back the trade that caused it.
///
/// `avg_price` is reset to `market_px` on every opening, including when adding
/// to a same-side position. The cost basis of the carried-over quantity is
/// therefore approximated by the latest fill price.
pub fn evaluate(
    state: &mut SimState,
    config: &SimConfig,
    external_px: f64,
    market_px: f64,
) -> Decision {
    if state.halted {
        return Decision::idle(Action::Halted);
    }

    let divergence = divergence(external_px, market_px);
    let size = size_trade(state.equity, config, market_px);

    if !exceeds_threshold(divergence, config.threshold) {
        return Decision::idle(Action::Hold);
    }

    let side = side_for(divergence);
    let closed_pnl = close_opposite(state, side, market_px);

    state.position += side * size.qty;
    state.avg_price = market_px;
    state.cash -= side * size.qty * market_px;
    state.cash -= size.fee;

    let mark = state.position * (market_px - state.avg_price);
    state.equity = state.cash + state.position * market_px + mark;

    let action = if loss_cap_breached(state.realized_pnl, config) {
        state.halted = true;
        Action::KillSwitch
    } else if side > 0.0 {
        Action::Buy
    } else {
        Action::Sell
    };

    Decision {
        action,
        divergence,
        closed_pnl,
    }
}

fn close_opposite(state: &mut SimState, side: f64, market_px: f64) -> Option<f64> {
    if state.is_flat() || (state.position > 0.0) == (side > 0.0) {
        return None;
    }

    let pnl = (market_px - state.avg_price) * state.position;
    state.cash += state.position * market_px + pnl;
    state.realized_pnl += pnl;
    state.position = 0.0;
    state.avg_price = 0.0;

    Some(pnl)
}
