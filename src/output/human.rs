#![forbid(unsafe_code)]

//! Human-readable output formatter
//!
//! Prints one line per result record, grouped under a heading per profile,
//! followed by the profile's summary line. Color is applied through
//! `termcolor`, so the same code renders plain text when color is off.

use crate::engine::ProfileReport;
use crate::types::Severity;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, NoColor, WriteColor};

/// Human-readable formatter for evaluation reports
pub struct HumanFormatter;

impl HumanFormatter {
    /// Creates a new HumanFormatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Write every report to a color-capable writer
    pub fn write<W: WriteColor>(&self, out: &mut W, reports: &[ProfileReport]) -> io::Result<()> {
        for (index, report) in reports.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            self.write_report(out, report)?;
        }

        if reports.len() > 1 {
            let blocked = reports.iter().filter(|r| !r.summary.can_proceed()).count();
            writeln!(out)?;
            if blocked == 0 {
                write_colored(out, Severity::Success, "Preflight PASSED")?;
                writeln!(out, ": {} profile(s) ready", reports.len())?;
            } else {
                write_colored(out, Severity::Error, "Preflight FAILED")?;
                writeln!(out, ": {} of {} profile(s) blocked", blocked, reports.len())?;
            }
        }

        Ok(())
    }

    fn write_report<W: WriteColor>(&self, out: &mut W, report: &ProfileReport) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "{}", report.name)?;
        out.reset()?;
        writeln!(out)?;

        for record in &report.records {
            write!(out, "  ")?;
            write_colored(out, record.severity, marker(record.severity))?;
            writeln!(out, " {}: {}", record.field, record.message)?;
        }

        write!(out, "  ")?;
        write_colored(out, report.summary.severity, report.summary.severity.as_str())?;
        writeln!(out, ": {}", report.summary.message)
    }

    /// Format reports as plain text without color codes
    pub fn format(&self, reports: &[ProfileReport]) -> io::Result<String> {
        let mut out = NoColor::new(Vec::new());
        self.write(&mut out, reports)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Warning => "!",
        Severity::Error => "✗",
        Severity::Info => "i",
    }
}

fn color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
        Severity::Info => Color::Cyan,
    }
}

fn write_colored<W: WriteColor>(out: &mut W, severity: Severity, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color(severity))))?;
    write!(out, "{}", text)?;
    out.reset()
}
