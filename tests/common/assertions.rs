//! Domain-specific assertions for loghist harnesses.
//!
//! These parse the TSV report and check the histogram invariants with
//! context-rich failure messages.

use loghist::HistogramEntry;

/// Parse TSV report lines (`<count>\t"<key>"`) back into entries. Lines that
/// do not look like report lines (passthrough echoes) are skipped.
pub fn parse_tsv(report: &str) -> Vec<HistogramEntry> {
    report
        .lines()
        .filter_map(|line| {
            let (count, quoted) = line.split_once('\t')?;
            let count = count.parse().ok()?;
            let key = quoted.strip_prefix('"')?.strip_suffix('"')?;
            Some(HistogramEntry {
                count,
                key: key.to_string(),
            })
        })
        .collect()
}

/// Assert that report counts never increase from one entry to the next.
pub fn assert_descending(entries: &[HistogramEntry]) {
    for pair in entries.windows(2) {
        assert!(
            pair[0].count >= pair[1].count,
            "report not in descending order:\n  {:?}\n  followed by {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Assert that report counts add up to the number of input lines.
pub fn assert_sums_to(entries: &[HistogramEntry], lines: usize) {
    let total: u64 = entries.iter().map(|e| e.count).sum();
    assert_eq!(
        total, lines as u64,
        "histogram total {total} does not match {lines} input lines"
    );
}

/// Assert that a report contains `key` with exactly `count` occurrences.
///
/// ```rust
/// assert_entry!(entries, "load config", 1);
/// ```
#[macro_export]
macro_rules! assert_entry {
    ($entries:expr, $key:expr, $count:expr) => {{
        let entries: &[loghist::HistogramEntry] = &$entries;
        let key: &str = $key;
        let expected: u64 = $count;
        match entries.iter().find(|e| e.key == key) {
            Some(e) if e.count == expected => {}
            Some(e) => panic!(
                "assert_entry! failed for key {:?}:\n  expected: {}\n  actual:   {}",
                key, expected, e.count
            ),
            None => panic!(
                "assert_entry! failed: key {:?} not in report.\n  Keys: {:?}",
                key,
                entries.iter().map(|e| &e.key).collect::<Vec<_>>()
            ),
        }
    }};
}
