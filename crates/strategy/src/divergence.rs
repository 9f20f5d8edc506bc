use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Hold,
    Buy,
    Sell,
    KillSwitch,
    Halted,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hold => "hold",
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::KillSwitch => "kill_switch",
            Self::Halted => "halted",
        }
    }

    pub fn is_trigger(self) -> bool {
        matches!(self, Self::Buy | Self::Sell)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative gap between the unlagged external price and the observed market price.
///
/// `market_px` must be positive; the driver guarantees this at setup.
pub fn divergence(external_px: f64, market_px: f64) -> f64 {
    (external_px - market_px) / market_px
}

pub fn exceeds_threshold(divergence: f64, threshold: f64) -> bool {
    divergence.abs() >= threshold
}

/// +1 for a positive divergence (external leads up), -1 otherwise.
pub fn side_for(divergence: f64) -> f64 {
    if divergence > 0.0 {
        1.0
    } else {
        -1.0
    }
}
