use core_sim::SimConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeSize {
    pub notional_cap: f64,
    pub qty: f64,
    pub fee: f64,
}

/// Sizes one micro trade as a fixed fraction of current equity at `market_px`.
pub fn size_trade(equity: f64, config: &SimConfig, market_px: f64) -> TradeSize {
    let notional_cap = equity * config.max_position_pct;
    let qty = notional_cap / market_px;
    let fee = bps_to_rate(config.fee_bps) * (qty * market_px);

    TradeSize {
        notional_cap,
        qty,
        fee,
    }
}

fn bps_to_rate(bps: f64) -> f64 {
    bps / 10_000.0
}

#[cfg(test)]
mod tests {
    use core_sim::SimConfig;

    use super::size_trade;

    #[test]
    fn default_sizing_uses_half_a_percent_of_equity() {
        let size = size_trade(100_000.0, &SimConfig::default(), 100.0);

        approx::assert_relative_eq!(size.notional_cap, 500.0);
        approx::assert_relative_eq!(size.qty, 5.0);
        approx::assert_relative_eq!(size.fee, 0.1);
    }

    #[test]
    fn zero_fee_bps_is_free() {
        let config = SimConfig {
            fee_bps: 0.0,
            ..SimConfig::default()
        };

        assert_eq!(size_trade(100_000.0, &config, 250.0).fee, 0.0);
    }
}
