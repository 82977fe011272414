//! Core types for loghist-core.
//!
//! This module defines the data shared across the pipeline stages: the
//! [`Normalized`] result of a normalizer, the [`HistogramEntry`] emitted by the
//! report, and the [`Strategy`] and [`ReportFormat`] selectors.

use serde::{Deserialize, Serialize};

/// Result of normalizing one raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Canonical key; the grouping identity of the line. May be empty.
    pub key: String,
    /// Line to echo immediately, before any histogram output. Only the prefix
    /// strategy sets this, for lines starting with `*`.
    pub passthrough: Option<String>,
}

impl Normalized {
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            passthrough: None,
        }
    }
}

/// One line of the report: a canonical key and how many raw lines mapped to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramEntry {
    pub count: u64,
    pub key: String,
}

/// Which normalizer turns raw lines into canonical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Keep the leading run of plain whitespace-separated tokens.
    #[default]
    Prefix,
    /// Strip quoted strings, connector clauses, numeric and hex-code tails.
    Strip,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Prefix => write!(f, "prefix"),
            Strategy::Strip => write!(f, "strip"),
        }
    }
}

/// How the report is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `<count>\t"<key>"`, key written verbatim.
    #[default]
    Tsv,
    /// One JSON object per line: `{"count":N,"key":"..."}`.
    Jsonl,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Tsv => write!(f, "tsv"),
            ReportFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}
