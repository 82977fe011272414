//! Normalizer — turns a raw log line into a canonical key.
//!
//! Two strategies share the [`Normalizer`] trait:
//!
//! - [`PrefixNormalizer`] keeps the leading run of "plain" tokens and stops at
//!   the first token carrying an uppercase letter, digit, quote or `?`.
//! - [`StripNormalizer`] cuts variable suffixes off the line with a fixed,
//!   ordered list of regex substitutions.
//!
//! Normalizers are pure: they never print. Lines the prefix strategy wants
//! echoed come back in [`Normalized::passthrough`] and the caller decides
//! when to write them.

use regex::Regex;

use crate::types::{Normalized, Strategy};

/// Maps a raw line to its canonical key.
pub trait Normalizer {
    fn normalize(&self, line: &str) -> Normalized;
}

/// Build the normalizer for `strategy`.
///
/// `passthrough` only affects [`Strategy::Prefix`]; the strip strategy never
/// echoes lines.
pub fn for_strategy(strategy: Strategy, passthrough: bool) -> Box<dyn Normalizer> {
    match strategy {
        Strategy::Prefix => Box::new(PrefixNormalizer::new(passthrough)),
        Strategy::Strip => Box::new(StripNormalizer::new()),
    }
}

// ---------------------------------------------------------------------------
// Prefix strategy
// ---------------------------------------------------------------------------

/// Marker that flags a line for immediate echo.
pub const PASSTHROUGH_MARKER: char = '*';

/// Returns `true` if `token` ends the plain prefix: it contains an ASCII
/// uppercase letter, an ASCII digit, `'`, `"` or `?`.
pub fn is_stop_token(token: &str) -> bool {
    token.bytes().any(|b| {
        b.is_ascii_uppercase() || b.is_ascii_digit() || matches!(b, b'\'' | b'"' | b'?')
    })
}

/// Whitespace for splitting and trimming lines: the ASCII set including
/// vertical tab. Non-ASCII spaces such as U+00A0 stay inside tokens.
pub fn is_line_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Keeps the whitespace-separated tokens in front of the first stop token.
#[derive(Debug, Clone, Copy)]
pub struct PrefixNormalizer {
    passthrough: bool,
}

impl PrefixNormalizer {
    pub fn new(passthrough: bool) -> Self {
        Self { passthrough }
    }
}

impl Default for PrefixNormalizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Normalizer for PrefixNormalizer {
    fn normalize(&self, line: &str) -> Normalized {
        let key = line
            .split(is_line_space)
            .filter(|token| !token.is_empty())
            .take_while(|token| !is_stop_token(token))
            .collect::<Vec<_>>()
            .join(" ");

        let passthrough = (self.passthrough && line.starts_with(PASSTHROUGH_MARKER))
            .then(|| line.trim_end_matches(is_line_space).to_string());

        Normalized { key, passthrough }
    }
}

// ---------------------------------------------------------------------------
// Strip strategy
// ---------------------------------------------------------------------------

/// Substitutions applied in order, each to the output of the previous one.
/// `(?s)` lets `.*` run through the line terminator so a trailing newline
/// never stops a cut.
const STRIP_PATTERNS: &[&str] = &[
    // Everything from the first quote.
    r#"(?s)['"].*"#,
    // Trailing connector clause. Plain substring match: " token" hits " to".
    r"(?s) (?:for|to|is|at|from|then).*",
    // Numeric tail.
    r"(?s) [0-9].*",
    // Hex-code tail such as ` c0d` or ` c??`.
    r"(?s) c[0-9a-f?]{2}.*",
];

/// Strips variable suffixes with [`STRIP_PATTERNS`], then trailing whitespace.
#[derive(Debug, Clone)]
pub struct StripNormalizer {
    patterns: Vec<Regex>,
}

impl StripNormalizer {
    pub fn new() -> Self {
        let patterns = STRIP_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("built-in strip pattern must compile"))
            .collect();
        Self { patterns }
    }
}

impl Default for StripNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer for StripNormalizer {
    fn normalize(&self, line: &str) -> Normalized {
        let mut current = line.to_string();
        for re in &self.patterns {
            if let Some(m) = re.find(&current) {
                current.truncate(m.start());
            }
        }
        current.truncate(current.trim_end_matches(is_line_space).len());
        Normalized::key(current)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
