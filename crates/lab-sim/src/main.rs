mod config;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use runtime::benchmark::ThroughputReport;
use runtime::logging::{RunLogWriter, TracingRunLogWriter};
use runtime::replay::ReplayCsvWriter;
use runtime::{RunSummary, SimEngine, TickRecord, TARGET_TICKS_PER_SEC};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let args = config::Args::parse();
    init_logging(&args.log_level)?;

    let sim_config = args.sim_config();
    let seed = args.seed.unwrap_or_else(rand::random);
    let request = args.run_request(seed);
    tracing::info!(
        seed,
        steps = request.steps,
        stress = request.stress,
        lag_ticks = sim_config.lag_ticks(),
        "starting simulation"
    );

    let mut engine = SimEngine::new(sim_config, request).context("invalid simulation config")?;
    let mut log = TracingRunLogWriter;

    let started = Instant::now();
    let outcome = engine.run(&mut log);
    let elapsed_nanos = started.elapsed().as_nanos();

    let throughput = ThroughputReport::measure(outcome.records.len() as u64, elapsed_nanos);
    tracing::debug!(
        ticks_per_sec = throughput.ticks_per_sec,
        meets_target = throughput.meets_target,
        target_ticks_per_sec = TARGET_TICKS_PER_SEC,
        "run throughput"
    );
    if let Some(report) = engine.latency().percentiles() {
        tracing::debug!(
            samples = report.count,
            p50_nanos = report.p50_nanos,
            p99_nanos = report.p99_nanos,
            max_nanos = report.max_nanos,
            "decision latency"
        );
    }

    write_replay_output(&args.output, &outcome.records, &mut log)?;

    let summary = RunSummary::from_records(&outcome.records);
    if args.summary_json {
        println!("{}", summary.to_json().context("failed to encode summary")?);
    } else {
        println!("{summary}");
    }

    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();

    Ok(())
}

fn write_replay_output(
    path: &Path,
    records: &[TickRecord],
    log: &mut dyn RunLogWriter,
) -> Result<()> {
    if let Some(parent) = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut replay_writer = ReplayCsvWriter::new(BufWriter::new(file));
    replay_writer
        .write_run_and_log(records, log)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}
