use strategy::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunLogEventKind {
    RunStarted,
    TradeExecuted,
    KillSwitchTriggered,
    RunCompleted,
    ReplayArtifactWritten,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunLogEvent {
    pub tick: u64,
    pub kind: RunLogEventKind,
    pub action: Option<Action>,
    pub realized_pnl: Option<f64>,
}

impl RunLogEvent {
    pub fn new(tick: u64, kind: RunLogEventKind) -> Self {
        Self {
            tick,
            kind,
            action: None,
            realized_pnl: None,
        }
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_realized_pnl(mut self, realized_pnl: f64) -> Self {
        self.realized_pnl = Some(realized_pnl);
        self
    }
}

pub trait RunLogWriter {
    fn write(&mut self, event: RunLogEvent);
}

#[derive(Debug, Default)]
pub struct InMemoryRunLogWriter {
    events: Vec<RunLogEvent>,
}

impl InMemoryRunLogWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RunLogEvent] {
        &self.events
    }
}

impl RunLogWriter for InMemoryRunLogWriter {
    fn write(&mut self, event: RunLogEvent) {
        self.events.push(event);
    }
}

/// Forwards run events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRunLogWriter;

impl RunLogWriter for TracingRunLogWriter {
    fn write(&mut self, event: RunLogEvent) {
        let action = event.action.map(Action::as_str).unwrap_or("-");
        let realized_pnl = event.realized_pnl.unwrap_or(0.0);

        match event.kind {
            RunLogEventKind::TradeExecuted => {
                tracing::debug!(tick = event.tick, action, realized_pnl, "trade executed");
            }
            RunLogEventKind::KillSwitchTriggered => {
                tracing::warn!(tick = event.tick, realized_pnl, "daily loss cap breached, trading halted");
            }
            RunLogEventKind::RunStarted => {
                tracing::info!(tick = event.tick, "run started");
            }
            RunLogEventKind::RunCompleted => {
                tracing::info!(tick = event.tick, realized_pnl, "run completed");
            }
            RunLogEventKind::ReplayArtifactWritten => {
                tracing::info!(tick = event.tick, "replay artifact written");
            }
        }
    }
}
