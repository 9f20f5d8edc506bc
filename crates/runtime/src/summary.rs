use std::fmt;

use core_sim::STARTING_CAPITAL;
use serde::Serialize;

use crate::events::TickRecord;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunSummary {
    pub rows: usize,
    pub triggers: usize,
    pub final_equity: f64,
    pub final_realized_pnl: f64,
    pub halted: bool,
}

impl RunSummary {
    pub fn from_records(records: &[TickRecord]) -> Self {
        let triggers = records
            .iter()
            .filter(|record| record.action.is_trigger())
            .count();

        match records.last() {
            Some(last) => Self {
                rows: records.len(),
                triggers,
                final_equity: last.equity,
                final_realized_pnl: last.realized_pnl,
                halted: last.halted,
            },
            None => Self {
                rows: 0,
                triggers: 0,
                final_equity: STARTING_CAPITAL,
                final_realized_pnl: 0.0,
                halted: false,
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows={} triggers={} final_equity={:.2} realized_pnl={:.2}",
            self.rows, self.triggers, self.final_equity, self.final_realized_pnl
        )
    }
}
