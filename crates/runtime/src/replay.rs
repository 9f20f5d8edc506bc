use std::io::{self, Write};

use crate::events::TickRecord;
use crate::logging::{RunLogEvent, RunLogEventKind, RunLogWriter};

pub const REPLAY_CSV_HEADER: &str =
    "t,external_px,market_px,divergence,action,equity,realized_pnl,position,halted\n";

pub struct ReplayCsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReplayCsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.writer.write_all(REPLAY_CSV_HEADER.as_bytes())
    }

    pub fn append_records(&mut self, records: &[TickRecord]) -> io::Result<()> {
        for record in records {
            let action = escape_csv_field(record.action.as_str());
            writeln!(
                self.writer,
                "{},{},{},{},{action},{},{},{},{}",
                record.t,
                record.external_px,
                record.market_px,
                record.divergence,
                record.equity,
                record.realized_pnl,
                record.position,
                record.halted,
            )?;
        }
        Ok(())
    }

    /// Writes a full artifact, flushes it, and only then reports it to `run_log_writer`.
    pub fn write_run_and_log(
        &mut self,
        records: &[TickRecord],
        run_log_writer: &mut dyn RunLogWriter,
    ) -> io::Result<()> {
        self.write_header()?;
        self.append_records(records)?;
        self.writer.flush()?;

        let last_tick = records.last().map_or(0, |record| record.t);
        run_log_writer.write(RunLogEvent::new(
            last_tick,
            RunLogEventKind::ReplayArtifactWritten,
        ));
        Ok(())
    }
}

fn escape_csv_field(value: &str) -> String {
    let needs_quotes = value
        .chars()
        .any(|ch| matches!(ch, ',' | '"' | '\n' | '\r'));
    if !needs_quotes {
        return value.to_string();
    }

    let escaped = value.replace('"', "\"\"");
    format!("\"{escaped}\"")
}
