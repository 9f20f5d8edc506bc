/// Samples kept when no explicit window is requested.
pub const DEFAULT_LATENCY_WINDOW: usize = 65_536;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyPercentiles {
    pub count: usize,
    pub p50_nanos: u64,
    pub p90_nanos: u64,
    pub p95_nanos: u64,
    pub p99_nanos: u64,
    pub max_nanos: u64,
}

/// Rolling window of decision latencies; once full, each sample overwrites the oldest.
#[derive(Debug, Clone)]
pub struct DecisionLatencyMetrics {
    latencies_nanos: Vec<u64>,
    window: usize,
    next: usize,
}

impl Default for DecisionLatencyMetrics {
    fn default() -> Self {
        Self::with_window(DEFAULT_LATENCY_WINDOW)
    }
}

impl DecisionLatencyMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// A window of zero is treated as one sample.
    pub fn with_window(window: usize) -> Self {
        Self {
            latencies_nanos: Vec::new(),
            window: window.max(1),
            next: 0,
        }
    }

    pub fn record_latency_nanos(&mut self, latency_nanos: u64) {
        if self.latencies_nanos.len() < self.window {
            self.latencies_nanos.push(latency_nanos);
        } else {
            self.latencies_nanos[self.next] = latency_nanos;
        }
        self.next = (self.next + 1) % self.window;
    }

    pub fn len(&self) -> usize {
        self.latencies_nanos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latencies_nanos.is_empty()
    }

    pub fn percentiles(&self) -> Option<LatencyPercentiles> {
        if self.latencies_nanos.is_empty() {
            return None;
        }

        let mut sorted = self.latencies_nanos.clone();
        sorted.sort_unstable();
        let count = sorted.len();

        Some(LatencyPercentiles {
            count,
            p50_nanos: percentile_nearest_rank(&sorted, 50),
            p90_nanos: percentile_nearest_rank(&sorted, 90),
            p95_nanos: percentile_nearest_rank(&sorted, 95),
            p99_nanos: percentile_nearest_rank(&sorted, 99),
            max_nanos: sorted[count - 1],
        })
    }
}

fn percentile_nearest_rank(sorted: &[u64], percentile: usize) -> u64 {
    let count = sorted.len();
    let rank = (percentile * count).div_ceil(100);
    sorted[rank.saturating_sub(1)]
}
