/// Starting capital for every run, and the fixed denominator of the daily loss cap.
pub const STARTING_CAPITAL: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimState {
    pub equity: f64,
    pub cash: f64,
    pub position: f64,
    pub avg_price: f64,
    pub realized_pnl: f64,
    pub halted: bool,
}

impl Default for SimState {
    fn default() -> Self {
        Self {
            equity: STARTING_CAPITAL,
            cash: STARTING_CAPITAL,
            position: 0.0,
            avg_price: 0.0,
            realized_pnl: 0.0,
            halted: false,
        }
    }
}

impl SimState {
    pub fn is_flat(&self) -> bool {
        self.position == 0.0
    }
}
