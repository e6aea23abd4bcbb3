//! Reporting sinks for dispatch outcomes.
//!
//! The core hands over a finished [`DispatchResult`] or a [`DispatchError`];
//! how it is rendered is decided here.

use std::io::{self, Write};

use serde::Serialize;
use tranche::{AllocationRecord, DispatchError, DispatchResult};

use crate::app::config::Noun;

/// Renders dispatch outcomes somewhere.
pub trait Reporter {
    /// Reports a successful dispatch.
    fn report(&mut self, result: &DispatchResult) -> io::Result<()>;

    /// Reports a request that produced no result.
    fn reject(&mut self, requested: i64, error: &DispatchError) -> io::Result<()>;
}

/// Human-readable output with singular/plural phrasing:
///
/// ```text
/// Requested amount 4600
/// 2 notes of 2000 dispatched
/// 1 note of 500 dispatched
/// 1 note of 100 dispatched
/// ```
pub struct TextReporter<W> {
    out: W,
    noun: Noun,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W, noun: Noun) -> Self {
        Self { out, noun }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn record_line(&mut self, record: &AllocationRecord) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {} of {} dispatched",
            record.count(),
            self.noun.for_record(record),
            record.unit()
        )
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, result: &DispatchResult) -> io::Result<()> {
        writeln!(self.out, "Requested amount {}", result.requested())?;
        for record in result {
            self.record_line(record)?;
        }
        writeln!(self.out)
    }

    fn reject(&mut self, requested: i64, error: &DispatchError) -> io::Result<()> {
        writeln!(self.out, "Requested amount {requested}")?;
        match error {
            DispatchError::InvalidAmount { reason, .. } => {
                writeln!(self.out, "Invalid amount {requested}: {reason}")?;
            }
            other => writeln!(self.out, "Dispatch failed: {other}")?,
        }
        writeln!(self.out)
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonLine<'a> {
    Dispatched {
        requested: u64,
        records: &'a [AllocationRecord],
    },
    Rejected {
        requested: i64,
        error: String,
    },
}

/// One JSON object per line, for piping into other tools.
pub struct JsonReporter<W> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &JsonLine<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, line)?;
        writeln!(self.out)
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, result: &DispatchResult) -> io::Result<()> {
        self.write_line(&JsonLine::Dispatched {
            requested: result.requested(),
            records: result.records(),
        })
    }

    fn reject(&mut self, requested: i64, error: &DispatchError) -> io::Result<()> {
        self.write_line(&JsonLine::Rejected {
            requested,
            error: error.to_string(),
        })
    }
}
