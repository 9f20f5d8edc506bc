use std::time::Instant;

use core_sim::{ConfigError, LagBuffer, PriceGenerator, SimConfig, SimState};
use strategy::{evaluate, Action, Decision};

use crate::events::{RunStatus, TickRecord};
use crate::logging::{RunLogEvent, RunLogEventKind, RunLogWriter};
use crate::metrics::DecisionLatencyMetrics;

pub const DEFAULT_INITIAL_PRICE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunRequest {
    pub steps: u64,
    pub stress: bool,
    pub seed: u64,
    pub initial_price: f64,
}

impl RunRequest {
    pub fn new(steps: u64, seed: u64) -> Self {
        Self {
            steps,
            stress: false,
            seed,
            initial_price: DEFAULT_INITIAL_PRICE,
        }
    }

    pub fn stressed(mut self) -> Self {
        self.stress = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub status: RunStatus,
    pub records: Vec<TickRecord>,
    /// Realized P&L of every closing event, in tick order.
    pub closed_pnls: Vec<f64>,
}

/// Single-run driver: owns the state, lag buffer and price stream for one run.
pub struct SimEngine {
    config: SimConfig,
    request: RunRequest,
    state: SimState,
    lag: LagBuffer,
    prices: PriceGenerator,
    external_px: f64,
    tick: u64,
    latency: DecisionLatencyMetrics,
}

impl SimEngine {
    /// Validates all run inputs up front so the tick loop never fails.
    pub fn new(config: SimConfig, request: RunRequest) -> Result<Self, ConfigError> {
        config.validate()?;
        if !request.initial_price.is_finite() || request.initial_price <= 0.0 {
            return Err(ConfigError::InvalidInitialPrice(request.initial_price));
        }
        let lag = LagBuffer::new(config.lag_ticks(), request.initial_price)?;

        Ok(Self {
            config,
            request,
            state: SimState::default(),
            lag,
            prices: PriceGenerator::from_seed(request.seed),
            external_px: request.initial_price,
            tick: 0,
            latency: DecisionLatencyMetrics::new(),
        })
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn latency(&self) -> &DecisionLatencyMetrics {
        &self.latency
    }

    /// Advances one tick and returns its record together with the decision behind it.
    pub fn step_once(&mut self) -> (TickRecord, Decision) {
        let t = self.tick;
        self.tick += 1;

        self.external_px = self.prices.next_price(self.external_px, self.request.stress);
        self.lag.push(self.external_px);
        let market_px = self.lag.front();

        let started = Instant::now();
        let decision = evaluate(&mut self.state, &self.config, self.external_px, market_px);
        let elapsed_nanos = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);
        self.latency.record_latency_nanos(elapsed_nanos);

        let record = TickRecord {
            t,
            external_px: self.external_px,
            market_px,
            divergence: decision.divergence,
            action: decision.action,
            equity: self.state.equity,
            realized_pnl: self.state.realized_pnl,
            position: self.state.position,
            halted: self.state.halted,
        };

        (record, decision)
    }

    /// Runs until the step budget is spent or the kill switch fires.
    ///
    /// The halting tick's record is kept; no ticks run after it. Meant to be
    /// called once per engine; latency samples stay readable afterwards.
    pub fn run(&mut self, log: &mut dyn RunLogWriter) -> RunOutcome {
        log.write(RunLogEvent::new(0, RunLogEventKind::RunStarted));

        let mut records = Vec::with_capacity(capacity_hint(self.request.steps));
        let mut closed_pnls = Vec::new();
        let mut status = RunStatus::Completed;

        for _ in 0..self.request.steps {
            let (record, decision) = self.step_once();
            closed_pnls.extend(decision.closed_pnl);
            records.push(record);

            match decision.action {
                Action::Buy | Action::Sell => log.write(
                    RunLogEvent::new(record.t, RunLogEventKind::TradeExecuted)
                        .with_action(decision.action)
                        .with_realized_pnl(record.realized_pnl),
                ),
                Action::KillSwitch => {
                    log.write(
                        RunLogEvent::new(record.t, RunLogEventKind::KillSwitchTriggered)
                            .with_action(decision.action)
                            .with_realized_pnl(record.realized_pnl),
                    );
                    status = RunStatus::Halted;
                    break;
                }
                Action::Hold | Action::Halted => {}
            }
        }

        let last_tick = records.last().map_or(0, |record| record.t);
        log.write(
            RunLogEvent::new(last_tick, RunLogEventKind::RunCompleted)
                .with_realized_pnl(self.state.realized_pnl),
        );

        RunOutcome {
            status,
            records,
            closed_pnls,
        }
    }
}

fn capacity_hint(steps: u64) -> usize {
    usize::try_from(steps).unwrap_or(usize::MAX).min(1 << 20)
}
