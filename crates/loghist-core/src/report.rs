//! Writes the sorted histogram.
//!
//! TSV lines are `<count>\t"<key>"` with the key written verbatim: quotes and
//! tabs inside a key are not escaped. JSONL lines are serialized with
//! `serde_json` and therefore escaped.

use std::io::Write;

use crate::error::Result;
use crate::histogram::Histogram;
use crate::types::{HistogramEntry, ReportFormat};

/// Output options for [`write_report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: ReportFormat,
    /// Keep only the first `top` entries. `None` keeps all.
    pub top: Option<usize>,
    /// Skip entries with fewer occurrences than this.
    pub min_count: u64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: ReportFormat::Tsv,
            top: None,
            min_count: 1,
        }
    }
}

/// Format one entry as a TSV line, without the trailing newline.
pub fn format_tsv(entry: &HistogramEntry) -> String {
    format!("{}\t\"{}\"", entry.count, entry.key)
}

/// Write one entry followed by a newline.
pub fn write_entry<W: Write>(out: &mut W, entry: &HistogramEntry, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Tsv => writeln!(out, "{}", format_tsv(entry))?,
        ReportFormat::Jsonl => {
            serde_json::to_writer(&mut *out, entry)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Drain `histogram` into `out`, most frequent first. Returns the number of
/// entries written.
pub fn write_report<W: Write>(out: &mut W, histogram: Histogram, opts: &ReportOptions) -> Result<usize> {
    let entries = histogram
        .into_sorted()
        .into_iter()
        .filter(|e| e.count >= opts.min_count)
        .take(opts.top.unwrap_or(usize::MAX));

    let mut written = 0;
    for entry in entries {
        write_entry(out, &entry, opts.format)?;
        written += 1;
    }
    out.flush()?;

    tracing::debug!(written, format = %opts.format, "report written");
    Ok(written)
}
