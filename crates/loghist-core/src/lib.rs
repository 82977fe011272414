//! loghist-core — clustering core for loghist.
//!
//! This crate exposes the pipeline stages as public modules, plus the shared
//! types used across all of them.
//!
//! # Architecture
//!
//! ```text
//! Reader ──► Normalizer ──► Histogram ──► Report
//!                │
//!                └──► passthrough lines (prefix strategy only)
//! ```
//!
//! Everything runs on one thread in a single pass. The histogram is an owned
//! value threaded from the aggregation step into the report step.

pub mod config;
pub mod error;
pub mod histogram;
pub mod normalizer;
pub mod report;
pub mod types;

pub use error::{HistError, Result};
pub use histogram::Histogram;
pub use normalizer::{Normalizer, PrefixNormalizer, StripNormalizer};
pub use types::{HistogramEntry, Normalized, ReportFormat, Strategy};
