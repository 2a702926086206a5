//! JSON-lines log of merge events.
//!
//! One object per line:
//!
//! ```text
//! {"event":"lock","top_row":30,"rows_cleared":1,"cleared":{"from_row":30,"to_row":31},"score_delta":100,"score":100,"interval_ms":800,"game_over":false}
//! ```
//!
//! Logging never interrupts play. The first failed write disables the log
//! and keeps the error for the caller to report once the terminal is back.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameState;
use crate::types::LockEvent;

#[derive(Debug, Serialize)]
struct LockRecord {
    event: &'static str,
    top_row: Option<usize>,
    rows_cleared: u32,
    cleared: Option<ClearedRecord>,
    score_delta: u32,
    score: u32,
    interval_ms: u32,
    game_over: bool,
}

/// Rows a clear repainted, inclusive.
#[derive(Debug, Serialize)]
struct ClearedRecord {
    from_row: usize,
    to_row: usize,
}

pub struct EventLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    buf: Vec<u8>,
    error: Option<String>,
}

impl EventLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {path}"))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    /// A log that drops every record.
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
            error: None,
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
            error: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Append one line for `event`, with score and interval as they stand
    /// after the merge.
    pub fn record(&mut self, event: &LockEvent, game: &GameState) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        let rec = LockRecord {
            event: "lock",
            top_row: event.top_row,
            rows_cleared: event.rows_cleared,
            cleared: event.cleared.map(|r| ClearedRecord {
                from_row: r.from_row,
                to_row: r.to_row,
            }),
            score_delta: event.score_delta,
            score: game.score(),
            interval_ms: game.interval_ms(),
            game_over: event.game_over,
        };

        self.buf.clear();
        let res = serde_json::to_writer(&mut self.buf, &rec)
            .map_err(anyhow::Error::from)
            .and_then(|()| {
                self.buf.push(b'\n');
                out.write_all(&self.buf)?;
                Ok(())
            });

        if let Err(e) = res {
            self.error = Some(e.to_string());
            self.out = None;
        }
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if let Err(e) = out.flush() {
                self.error = Some(e.to_string());
                self.out = None;
            }
        }
    }

    /// The write error that disabled the log, if any.
    pub fn take_error(&mut self) -> Option<String> {
        self.error.take()
    }

    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}
