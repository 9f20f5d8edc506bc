use crate::TARGET_TICKS_PER_SEC;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThroughputReport {
    pub ticks_per_sec: u64,
    pub meets_target: bool,
}

impl ThroughputReport {
    /// Compares achieved throughput against [`TARGET_TICKS_PER_SEC`].
    pub fn measure(processed_ticks: u64, elapsed_nanos: u128) -> Self {
        let ticks_per_sec = calculate_ticks_per_sec(processed_ticks, elapsed_nanos);
        Self {
            ticks_per_sec,
            meets_target: meets_target_ticks_per_sec(ticks_per_sec, TARGET_TICKS_PER_SEC),
        }
    }
}

pub fn calculate_ticks_per_sec(processed_ticks: u64, elapsed_nanos: u128) -> u64 {
    if elapsed_nanos == 0 {
        return 0;
    }

    let scaled_ticks = (processed_ticks as u128).saturating_mul(1_000_000_000);
    let achieved = scaled_ticks / elapsed_nanos;
    u64::try_from(achieved).unwrap_or(u64::MAX)
}

pub fn meets_target_ticks_per_sec(achieved_ticks_per_sec: u64, target_ticks_per_sec: u64) -> bool {
    achieved_ticks_per_sec >= target_ticks_per_sec
}
