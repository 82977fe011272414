//! loghist — cluster noisy log lines by their stable prefix.
//!
//! Reads lines, reduces each to a canonical key with one of two normalizers,
//! counts the keys and prints a histogram, most frequent first.
//!
//! # Architecture
//!
//! ```text
//! LineReader ──► Normalizer ──► Histogram ──► write_report
//!                    │
//!                    └──► passthrough lines, written as they are seen
//! ```
//!
//! [`run`] wires the stages over any `BufRead`/`Write` pair so the whole
//! pipeline can be exercised in-process; the binary only adds CLI parsing,
//! config loading and logging.

use std::io::{BufRead, Write};

pub use loghist_core::{
    config, histogram, normalizer, report, types, HistError, Histogram, HistogramEntry,
    Normalized, Normalizer, ReportFormat, Result, Strategy,
};
pub use loghist_feeds::LineReader;

use loghist_core::config::Config;
use loghist_core::report::ReportOptions;

/// Everything [`run`] needs to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub strategy: Strategy,
    /// Echo `*`-prefixed lines (prefix strategy only).
    pub passthrough: bool,
    pub report: ReportOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Prefix,
            passthrough: true,
            report: ReportOptions::default(),
        }
    }
}

impl From<&Config> for RunOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            strategy: cfg.normalize.strategy,
            passthrough: cfg.normalize.passthrough,
            report: cfg.report.options(),
        }
    }
}

/// Counters from one [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Raw lines read; equals the histogram total.
    pub lines: u64,
    /// Passthrough lines echoed.
    pub passthrough: u64,
    /// Distinct canonical keys.
    pub distinct: usize,
    /// Report entries written after `top`/`min_count` filtering.
    pub written: usize,
}

/// Read every line of `input`, aggregate, then report to `out`.
///
/// Passthrough lines are written (and flushed) as soon as they are read. On a
/// read error nothing further is written and the error is returned.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W, opts: &RunOptions) -> Result<RunSummary> {
    let normalizer = normalizer::for_strategy(opts.strategy, opts.passthrough);
    let (histogram, passthrough) = aggregate(LineReader::new(input), normalizer.as_ref(), out)?;

    let mut summary = RunSummary {
        lines: histogram.total(),
        passthrough,
        distinct: histogram.len(),
        written: 0,
    };
    tracing::debug!(lines = summary.lines, distinct = summary.distinct, "aggregation finished");

    summary.written = report::write_report(out, histogram, &opts.report)?;
    Ok(summary)
}

/// Normalize and count every line, echoing passthrough lines to `out`.
/// Returns the histogram and how many lines were echoed.
pub fn aggregate<I, W>(lines: I, normalizer: &dyn Normalizer, out: &mut W) -> Result<(Histogram, u64)>
where
    I: IntoIterator<Item = Result<String>>,
    W: Write,
{
    let mut histogram = Histogram::new();
    let mut echoed = 0;

    for line in lines {
        let Normalized { key, passthrough } = normalizer.normalize(&line?);
        if let Some(echo) = passthrough {
            writeln!(out, "{echo}")?;
            out.flush()?;
            echoed += 1;
        }
        histogram.record(key);
    }

    Ok((histogram, echoed))
}
