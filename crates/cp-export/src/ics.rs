//! iCalendar (RFC 5545) feed backend.
//!
//! Each custody block becomes one all-day `VEVENT`:
//!
//! ```text
//! BEGIN:VEVENT
//! UID:5f0c9a1e3b7d2c44-0001@custody-schedule
//! DTSTAMP:20240101T120000Z
//! DTSTART;VALUE=DATE:20240101
//! DTEND;VALUE=DATE:20240108        (exclusive: last custody day + 1)
//! SUMMARY:Parent A
//! LOCATION:School
//! DESCRIPTION:Exchange at 18:00\, School
//! END:VEVENT
//! ```
//!
//! The feed is a point-in-time snapshot.  UIDs are unique within one run
//! (random run token + sequence number) and are not meant to match across
//! runs.

use std::io::Write;

use chrono::NaiveDate;
use cp_core::next_day;
use cp_schedule::CustodyBlock;
use ical::parser::ical::component::IcalEvent;
use rand::RngCore;
use tracing::debug;

use crate::writer::ScheduleWriter;
use crate::{ExportContext, ExportError, ExportResult};

const PRODID: &str = "-//rust_custody//Custody Schedule//EN";
const UID_DOMAIN: &str = "custody-schedule";
const DATE_FORMAT: &str = "%Y%m%d";
/// Maximum octets per physical line, excluding the CRLF.
const FOLD_AT: usize = 75;

// ── Writer ────────────────────────────────────────────────────────────────────

/// Streams custody blocks as an `.ics` calendar.
pub struct IcsWriter<W: Write> {
    out:       W,
    run_token: u64,
    sequence:  u32,
    started:   bool,
    finished:  bool,
}

impl<W: Write> IcsWriter<W> {
    /// Wrap `out` with a fresh random run token.
    pub fn new(out: W) -> Self {
        Self::with_run_token(out, rand::thread_rng().next_u64())
    }

    /// Wrap `out` with a fixed run token (reproducible UIDs).
    pub fn with_run_token(out: W, run_token: u64) -> Self {
        Self { out, run_token, sequence: 0, started: false, finished: false }
    }

    /// Unwrap the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, content: &str) -> ExportResult<()> {
        self.out.write_all(fold_line(content).as_bytes())?;
        Ok(())
    }

    fn start(&mut self, ctx: &ExportContext) -> ExportResult<()> {
        if self.started {
            return Ok(());
        }
        self.started = true;
        self.line("BEGIN:VCALENDAR")?;
        self.line("VERSION:2.0")?;
        self.line(&format!("PRODID:{PRODID}"))?;
        self.line("CALSCALE:GREGORIAN")?;
        self.line("METHOD:PUBLISH")?;
        self.line(&format!("X-WR-CALNAME:{}", escape_text(&ctx.title)))
    }
}

impl<W: Write> ScheduleWriter for IcsWriter<W> {
    fn write_block(&mut self, block: &CustodyBlock, ctx: &ExportContext) -> ExportResult<()> {
        if self.finished {
            return Err(ExportError::Ics("write after finish".into()));
        }
        let end = block.exclusive_end()?;
        self.start(ctx)?;
        self.sequence += 1;

        let uid = format!("{:016x}-{:04}@{UID_DOMAIN}", self.run_token, self.sequence);
        let stamp = ctx.generated_at.format("%Y%m%dT%H%M%SZ");

        self.line("BEGIN:VEVENT")?;
        self.line(&format!("UID:{uid}"))?;
        self.line(&format!("DTSTAMP:{stamp}"))?;
        self.line(&format!("DTSTART;VALUE=DATE:{}", block.start.format(DATE_FORMAT)))?;
        self.line(&format!("DTEND;VALUE=DATE:{}", end.format(DATE_FORMAT)))?;
        self.line(&format!("SUMMARY:{}", escape_text(ctx.names.name(block.parent))))?;
        if let Some(location) = &ctx.exchange_location {
            self.line(&format!("LOCATION:{}", escape_text(location)))?;
        }
        if let Some(description) = ctx.exchange_description() {
            self.line(&format!("DESCRIPTION:{}", escape_text(&description)))?;
        }
        self.line("TRANSP:TRANSPARENT")?;
        self.line("END:VEVENT")
    }

    fn finish(&mut self, ctx: &ExportContext) -> ExportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.start(ctx)?;
        self.finished = true;
        self.line("END:VCALENDAR")?;
        self.out.flush()?;
        debug!(events = self.sequence, "calendar feed written");
        Ok(())
    }
}

// ── Text helpers ──────────────────────────────────────────────────────────────

/// Escape a TEXT value: backslash, semicolon, comma, and newlines.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\r' => {
                if chars.peek() != Some(&'\n') {
                    out.push_str("\\n");
                }
            }
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}

/// Inverse of [`escape_text`].
pub fn unescape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Fold one content line to at most [`FOLD_AT`] octets per physical line,
/// terminating every physical line with CRLF.  Splits only on UTF-8
/// character boundaries.
pub fn fold_line(content: &str) -> String {
    let mut out = String::with_capacity(content.len() + 8);
    let mut width = 0;
    for c in content.chars() {
        let len = c.len_utf8();
        if width + len > FOLD_AT {
            out.push_str("\r\n ");
            width = 1;
        }
        out.push(c);
        width += len;
    }
    out.push_str("\r\n");
    out
}

// ── Reader ────────────────────────────────────────────────────────────────────

/// An all-day event read back from a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsEvent {
    pub uid:         Option<String>,
    pub start:       NaiveDate,
    /// Exclusive, as written in `DTEND`.
    pub end:         NaiveDate,
    pub summary:     String,
    pub location:    Option<String>,
    pub description: Option<String>,
}

impl IcsEvent {
    /// Last day covered by the event (`end - 1`).
    pub fn last_day(&self) -> NaiveDate {
        self.end.pred_opt().unwrap_or(self.end)
    }
}

/// Parse the all-day `VEVENT`s of a feed produced by [`IcsWriter`].
///
/// Parsing (line unfolding, property parameters) is done by `ical`; TEXT
/// values are unescaped here.  Properties other than the ones in
/// [`IcsEvent`] are ignored.
pub fn read_events(text: &str) -> ExportResult<Vec<IcsEvent>> {
    let mut events = Vec::new();
    for calendar in ical::IcalParser::new(text.as_bytes()) {
        let calendar = calendar.map_err(|e| ExportError::Ics(format!("ICS parse error: {e}")))?;
        for event in &calendar.events {
            events.push(event_from_ical(event)?);
        }
    }
    Ok(events)
}

fn event_from_ical(event: &IcalEvent) -> ExportResult<IcsEvent> {
    let mut uid = None;
    let mut start = None;
    let mut end = None;
    let mut summary = None;
    let mut location = None;
    let mut description = None;

    for property in &event.properties {
        let Some(value) = property.value.as_deref() else { continue };
        match property.name.to_ascii_uppercase().as_str() {
            "UID" => uid = Some(value.to_owned()),
            "DTSTART" => start = Some(parse_date(value)?),
            "DTEND" => end = Some(parse_date(value)?),
            "SUMMARY" => summary = Some(unescape_text(value)),
            "LOCATION" => location = Some(unescape_text(value)),
            "DESCRIPTION" => description = Some(unescape_text(value)),
            _ => {}
        }
    }

    let start = start.ok_or_else(|| ExportError::Ics("VEVENT without DTSTART".into()))?;
    // RFC 5545: an all-day event without DTEND lasts one day.
    let end = match end {
        Some(end) => end,
        None => next_day(start)?,
    };
    Ok(IcsEvent {
        uid,
        start,
        end,
        summary: summary.unwrap_or_default(),
        location,
        description,
    })
}

fn parse_date(value: &str) -> ExportResult<NaiveDate> {
    let digits = value.get(..8).unwrap_or(value);
    NaiveDate::parse_from_str(digits, DATE_FORMAT)
        .map_err(|e| ExportError::Ics(format!("invalid date {value:?}: {e}")))
}
