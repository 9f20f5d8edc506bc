use std::path::PathBuf;

use clap::Parser;
use core_sim::SimConfig;
use runtime::{RunRequest, DEFAULT_INITIAL_PRICE};

const DEFAULT_OUTPUT_PATH: &str = "artifacts/run.csv";

/// Latency-arbitrage simulation against a synthetic lagged market.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Number of decision ticks to simulate
    #[arg(long, env = "LAB_SIM_STEPS", default_value_t = 5_000, value_parser = clap::value_parser!(u64).range(1..))]
    pub steps: u64,

    /// Minimum absolute relative divergence required to trade
    #[arg(long, env = "LAB_SIM_THRESHOLD", default_value_t = 0.003)]
    pub threshold: f64,

    /// Fraction of current equity committed per trade
    #[arg(long, env = "LAB_SIM_MAX_POSITION_PCT", default_value_t = 0.005)]
    pub max_position_pct: f64,

    /// Realized loss, as a fraction of starting capital, that halts trading
    #[arg(long, env = "LAB_SIM_DAILY_LOSS_CAP_PCT", default_value_t = 0.02)]
    pub daily_loss_cap_pct: f64,

    #[arg(long, env = "LAB_SIM_MARKET_LAG_MS", default_value_t = 120)]
    pub market_lag_ms: u64,

    #[arg(long, env = "LAB_SIM_DECISION_INTERVAL_MS", default_value_t = 50)]
    pub decision_interval_ms: u64,

    /// Proportional fee on trade notional, in basis points
    #[arg(long, env = "LAB_SIM_FEE_BPS", default_value_t = 2.0)]
    pub fee_bps: f64,

    /// CSV file for the per-tick trajectory
    #[arg(long, env = "LAB_SIM_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Use the high-volatility price process
    #[arg(long, env = "LAB_SIM_STRESS")]
    pub stress: bool,

    /// Seed for the price process; random when omitted
    #[arg(long, env = "LAB_SIM_SEED")]
    pub seed: Option<u64>,

    #[arg(long, env = "LAB_SIM_INITIAL_PRICE", default_value_t = DEFAULT_INITIAL_PRICE)]
    pub initial_price: f64,

    /// Log level, overridden by RUST_LOG
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Print the summary as JSON instead of a key=value line
    #[arg(long)]
    pub summary_json: bool,
}

impl Args {
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            threshold: self.threshold,
            max_position_pct: self.max_position_pct,
            daily_loss_cap_pct: self.daily_loss_cap_pct,
            market_lag_ms: self.market_lag_ms,
            decision_interval_ms: self.decision_interval_ms,
            fee_bps: self.fee_bps,
        }
    }

    pub fn run_request(&self, seed: u64) -> RunRequest {
        RunRequest {
            steps: self.steps,
            stress: self.stress,
            seed,
            initial_price: self.initial_price,
        }
    }
}
