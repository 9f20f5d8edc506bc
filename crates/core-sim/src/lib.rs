mod config;
mod generators;
mod lag_buffer;
mod state;

pub use config::{ConfigError, SimConfig};
pub use generators::{PriceGenerator, NORMAL_SIGMA, PRICE_FLOOR, STRESS_SIGMA};
pub use lag_buffer::LagBuffer;
pub use state::{SimState, STARTING_CAPITAL};
