use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};

pub const NORMAL_SIGMA: f64 = 0.001;
pub const STRESS_SIGMA: f64 = 0.003;
pub const PRICE_FLOOR: f64 = 1.0;

/// Multiplicative Gaussian random walk for the external reference price.
///
/// Owns its random stream, so two generators built from the same seed yield
/// identical price paths.
#[derive(Debug, Clone)]
pub struct PriceGenerator {
    rng: ChaCha8Rng,
}

impl PriceGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns `prev * (1 + eps)` with `eps ~ N(0, sigma)`, floored at [`PRICE_FLOOR`].
    pub fn next_price(&mut self, prev: f64, stress: bool) -> f64 {
        let sigma = if stress { STRESS_SIGMA } else { NORMAL_SIGMA };
        let z: f64 = StandardNormal.sample(&mut self.rng);
        (prev * (1.0 + sigma * z)).max(PRICE_FLOOR)
    }
}
