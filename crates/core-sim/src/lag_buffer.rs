use crate::config::ConfigError;

/// Fixed-capacity ring that delays the external price by its capacity in ticks.
///
/// The buffer is always full: it starts pre-filled and every push overwrites
/// the oldest slot, so `front` is always the oldest retained price.
#[derive(Debug, Clone, PartialEq)]
pub struct LagBuffer {
    slots: Vec<f64>,
    head: usize,
}

impl LagBuffer {
    pub fn new(capacity: usize, fill: f64) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroLagCapacity);
        }

        Ok(Self {
            slots: vec![fill; capacity],
            head: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Appends `price`, evicting the oldest entry.
    pub fn push(&mut self, price: f64) {
        self.slots[self.head] = price;
        self.head = (self.head + 1) % self.slots.len();
    }

    pub fn front(&self) -> f64 {
        self.slots[self.head]
    }
}
