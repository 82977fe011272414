//! Static log corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of raw lines without
//! terminators; [`as_input`] joins them into a newline-terminated stream.

/// The three-line scenario: two identical plain lines and one that stops at
/// an uppercase token.
pub const CORPUS_LOAD_CONFIG: &[&str] = &[
    "load config from disk",
    "load config FAILED",
    "load config from disk",
];

/// A small service log mixing quoted values, connector clauses, numeric and
/// hex-code tails and one `*` alert line.
pub const CORPUS_SERVICE: &[&str] = &[
    "connection reset for user 'alice' at 10:32",
    "connection reset for user 'bob' at 10:33",
    "load config from disk",
    "load config FAILED",
    "*ALERT: disk full",
    "worker started in 12ms",
    "worker started in 9ms",
    "load config from disk",
    "request failed c0d status ok",
    "request failed c1e status ok",
];

/// Lines that exercise whitespace handling: blanks, tabs, CRLF endings.
pub const CORPUS_WHITESPACE: &[&str] = &[
    "",
    "   ",
    "\tqueue drained\t",
    "queue   drained\r",
    "queue drained",
];

/// Raw byte input with invalid UTF-8 in the middle of a line.
pub const INPUT_INVALID_UTF8: &[u8] = b"cache miss \xff\xfe key\ncache miss for key 7\n";

/// Join `lines` into a newline-terminated input stream.
pub fn as_input(lines: &[&str]) -> String {
    lines.iter().map(|l| format!("{l}\n")).collect()
}

/// Generate `n` synthetic lines spread over a handful of clusters with
/// varying counts: cluster `k` gets every line where `i % 15` falls in its
/// band, so cluster sizes are 5:4:3:2:1.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| match i % 15 {
            0..=4 => format!("request served in {}ms", i % 97),
            5..=8 => format!("cache miss for key 'user:{i}'"),
            9..=11 => format!("worker {} restarted c{:02x}", i % 8, i % 256),
            12..=13 => format!("retry scheduled at 10:{:02}", i % 60),
            _ => format!("*ALERT shard {i} unreachable"),
        })
        .collect()
}
