use core_sim::{SimConfig, SimState};
use runtime::logging::InMemoryRunLogWriter;
use runtime::{RunOutcome, RunRequest, RunStatus, RunSummary, SimEngine};
use strategy::Action;

fn run(config: SimConfig, request: RunRequest) -> RunOutcome {
    let mut log = InMemoryRunLogWriter::new();
    SimEngine::new(config, request)
        .expect("run inputs should be valid")
        .run(&mut log)
}

#[test]
fn same_seed_reproduces_the_run_bit_for_bit() {
    let first = run(SimConfig::default(), RunRequest::new(5_000, 42));
    let second = run(SimConfig::default(), RunRequest::new(5_000, 42));

    assert_eq!(first, second);

    let a = RunSummary::from_records(&first.records);
    let b = RunSummary::from_records(&second.records);
    assert_eq!(a.rows, b.rows);
    assert_eq!(a.final_equity.to_bits(), b.final_equity.to_bits());
    assert_eq!(a.final_realized_pnl.to_bits(), b.final_realized_pnl.to_bits());
}

#[test]
fn stressed_runs_are_reproducible_too() {
    let request = RunRequest::new(2_000, 99).stressed();

    assert_eq!(
        run(SimConfig::default(), request),
        run(SimConfig::default(), request)
    );
}

#[test]
fn different_seeds_produce_different_paths() {
    let a = run(SimConfig::default(), RunRequest::new(200, 1));
    let b = run(SimConfig::default(), RunRequest::new(200, 2));

    assert_ne!(a.records[0].external_px, b.records[0].external_px);
}

#[test]
fn closing_pnls_sum_to_final_realized_pnl() {
    let config = SimConfig {
        threshold: 0.0005,
        daily_loss_cap_pct: 1.0,
        ..SimConfig::default()
    };

    let outcome = run(config, RunRequest::new(5_000, 7).stressed());
    let last = outcome.records.last().expect("run should produce rows");

    assert!(!outcome.closed_pnls.is_empty());
    let summed = outcome.closed_pnls.iter().fold(0.0, |acc, pnl| acc + pnl);
    assert_eq!(summed, last.realized_pnl);
}

/// A zero loss cap is already breached by the starting P&L, so the first trade halts.
fn halting_config() -> SimConfig {
    SimConfig {
        threshold: 0.002,
        daily_loss_cap_pct: 0.0,
        ..SimConfig::default()
    }
}

#[test]
fn kill_switch_row_is_last_and_halted() {
    let config = halting_config();

    let outcome = run(config, RunRequest::new(5_000, 3));

    assert_eq!(outcome.status, RunStatus::Halted);
    let (last, earlier) = outcome.records.split_last().expect("halted run has rows");
    assert_eq!(last.action, Action::KillSwitch);
    assert!(last.halted);
    assert_ne!(last.position, 0.0);
    assert!(last.realized_pnl / 100_000.0 <= -config.daily_loss_cap_pct);
    assert!(earlier
        .iter()
        .all(|record| !record.halted && record.action == Action::Hold));
    assert_eq!(last.t, earlier.len() as u64);
    assert!(outcome.records.len() < 5_000);
}

#[test]
fn halted_flag_is_monotone_across_records() {
    let config = halting_config();

    for seed in 0..20 {
        let outcome = run(config, RunRequest::new(2_000, seed).stressed());
        let first_trade = outcome
            .records
            .iter()
            .position(|record| record.action != Action::Hold);

        let index = first_trade.expect("stressed run should trade within 2000 ticks");
        assert!(
            outcome.records[index].realized_pnl / 100_000.0 <= -config.daily_loss_cap_pct
        );
        assert!(outcome.records[index..].iter().all(|record| record.halted));
        assert!(outcome.records[..index].iter().all(|record| !record.halted));
        assert_eq!(index, outcome.records.len() - 1);
        assert_eq!(outcome.status, RunStatus::Halted);
    }
}

#[test]
fn ticks_after_a_halt_are_frozen_halted_rows() {
    let mut engine = SimEngine::new(halting_config(), RunRequest::new(5_000, 11)).unwrap();
    let mut log = InMemoryRunLogWriter::new();

    let outcome = engine.run(&mut log);
    assert_eq!(outcome.status, RunStatus::Halted);
    let frozen = *engine.state();
    let last_tick = outcome.records.last().expect("halted run has rows").t;

    for offset in 1..=50 {
        let (record, decision) = engine.step_once();

        assert_eq!(record.t, last_tick + offset);
        assert_eq!(decision.action, Action::Halted);
        assert_eq!(decision.divergence, 0.0);
        assert_eq!(decision.closed_pnl, None);
        assert_eq!(record.action, Action::Halted);
        assert!(record.halted);
        assert_eq!(record.equity, frozen.equity);
        assert_eq!(record.realized_pnl, frozen.realized_pnl);
        assert_eq!(record.position, frozen.position);
        assert_eq!(*engine.state(), frozen);
    }
}

#[test]
fn equity_matches_cash_plus_position_on_trade_ticks() {
    let config = SimConfig {
        threshold: 0.0005,
        daily_loss_cap_pct: 1.0,
        ..SimConfig::default()
    };
    let mut engine = SimEngine::new(config, RunRequest::new(1_000, 21)).unwrap();
    let mut previous = SimState::default();

    for _ in 0..1_000 {
        let (record, decision) = engine.step_once();
        let state = *engine.state();

        if matches!(decision.action, Action::Hold | Action::Halted) {
            assert_eq!(state, previous);
        } else {
            approx::assert_relative_eq!(
                state.equity,
                state.cash + state.position * record.market_px,
                max_relative = 1e-12
            );
        }
        previous = state;
    }
}
