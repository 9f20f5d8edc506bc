use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),
    #[error("max_position_pct must be finite and non-negative, got {0}")]
    InvalidMaxPositionPct(f64),
    #[error("daily_loss_cap_pct must be finite and non-negative, got {0}")]
    InvalidDailyLossCapPct(f64),
    #[error("fee_bps must be finite and non-negative, got {0}")]
    InvalidFeeBps(f64),
    #[error("decision_interval_ms must be greater than zero")]
    ZeroDecisionInterval,
    #[error("initial price must be finite and positive, got {0}")]
    InvalidInitialPrice(f64),
    #[error("lag buffer capacity must be at least one tick")]
    ZeroLagCapacity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub threshold: f64,
    pub max_position_pct: f64,
    pub daily_loss_cap_pct: f64,
    pub market_lag_ms: u64,
    pub decision_interval_ms: u64,
    pub fee_bps: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            threshold: 0.003,
            max_position_pct: 0.005,
            daily_loss_cap_pct: 0.02,
            market_lag_ms: 120,
            decision_interval_ms: 50,
            fee_bps: 2.0,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_non_negative(self.threshold) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        if !is_non_negative(self.max_position_pct) {
            return Err(ConfigError::InvalidMaxPositionPct(self.max_position_pct));
        }
        if !is_non_negative(self.daily_loss_cap_pct) {
            return Err(ConfigError::InvalidDailyLossCapPct(self.daily_loss_cap_pct));
        }
        if !is_non_negative(self.fee_bps) {
            return Err(ConfigError::InvalidFeeBps(self.fee_bps));
        }
        if self.decision_interval_ms == 0 {
            return Err(ConfigError::ZeroDecisionInterval);
        }

        Ok(())
    }

    /// Depth of the market lag buffer in decision ticks, never less than one.
    ///
    /// Callers must have validated the config first; a zero decision interval
    /// is treated as a single tick rather than dividing by zero.
    pub fn lag_ticks(&self) -> usize {
        let ticks = self
            .market_lag_ms
            .checked_div(self.decision_interval_ms)
            .unwrap_or(1);
        usize::try_from(ticks).unwrap_or(usize::MAX).max(1)
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
