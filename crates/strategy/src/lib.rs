pub mod divergence;
pub mod engine;
pub mod risk;
pub mod sizing;

pub use divergence::{divergence, Action};
pub use engine::{evaluate, Decision};
pub use risk::loss_cap_breached;
pub use sizing::{size_trade, TradeSize};
