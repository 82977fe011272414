//! Line reader over any buffered byte stream.
//!
//! Each item is one physical line with its terminator kept. A final line
//! without a terminator is still yielded. Bytes that are not valid UTF-8 are
//! replaced with U+FFFD rather than rejected.

use std::io::BufRead;

use loghist_core::Result;

/// Lazy, single-use iterator of raw lines.
///
/// Read errors are yielded once; the caller is expected to stop there.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    lines: u64,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            lines: 0,
            done: false,
        }
    }

    /// Lines yielded so far.
    pub fn lines_read(&self) -> u64 {
        self.lines
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.inner.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                tracing::debug!(lines = self.lines, "input exhausted");
                None
            }
            Ok(_) => {
                self.lines += 1;
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => {
                self.done = true;
                tracing::debug!(lines = self.lines, error = %e, "input read failed");
                Some(Err(e.into()))
            }
        }
    }
}
