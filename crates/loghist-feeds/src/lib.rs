//! loghist-feeds — line sources for loghist.
//!
//! A feed turns a byte stream into raw lines for the normalizer. The binary
//! wraps the locked process stdin; tests wrap in-memory buffers.

pub mod stdin;

pub use stdin::LineReader;
