use core::ops::Deref;

use embedded_io_async::Read;

/// Line handed out by [`LineReader::read_line`], without its line ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    bytes: &'a [u8],
    truncated: bool,
}

impl<'a> Line<'a> {
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The line did not fit the reader buffer and only its head is kept.
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl Deref for Line<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.bytes
    }
}

/// Buffered line reader over an async byte stream.
///
/// Lines are returned without the trailing `\r\n` (or bare `\n`). A line
/// longer than `N` bytes is returned cut to `N` bytes and marked as
/// truncated; the rest of it is dropped.
pub struct LineReader<const N: usize> {
    buf: [u8; N],
    start: usize,
    end: usize,
    discarding: bool,
}

impl<const N: usize> LineReader<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            start: 0,
            end: 0,
            discarding: false,
        }
    }

    /// Read the next line.
    ///
    /// Returns `None` once the stream is exhausted.
    pub async fn read_line<R: Read>(
        &mut self,
        reader: &mut R,
    ) -> Result<Option<Line<'_>>, R::Error> {
        loop {
            if let Some(pos) = self.find_newline() {
                let line_start = self.start;
                let mut line_end = self.start + pos;
                self.start = line_end + 1;
                if self.discarding {
                    self.discarding = false;
                    continue;
                }
                if line_end > line_start && self.buf[line_end - 1] == b'\r' {
                    line_end -= 1;
                }
                return Ok(Some(Line {
                    bytes: &self.buf[line_start..line_end],
                    truncated: false,
                }));
            }

            if self.discarding {
                self.start = self.end;
            }
            self.compact();

            if self.end == N {
                // Line does not fit, hand out its head and drop the tail
                self.start = N;
                self.discarding = true;
                return Ok(Some(Line {
                    bytes: &self.buf[..N],
                    truncated: true,
                }));
            }

            let n = reader.read(&mut self.buf[self.end..]).await?;
            if n == 0 {
                if self.discarding || self.start == self.end {
                    self.discarding = false;
                    return Ok(None);
                }
                let line_start = self.start;
                self.start = self.end;
                return Ok(Some(Line {
                    bytes: &self.buf[line_start..self.end],
                    truncated: false,
                }));
            }
            self.end += n;
        }
    }

    fn find_newline(&self) -> Option<usize> {
        self.buf[self.start..self.end]
            .iter()
            .position(|&b| b == b'\n')
    }

    fn compact(&mut self) {
        if self.start == 0 {
            return;
        }
        self.buf.copy_within(self.start..self.end, 0);
        self.end -= self.start;
        self.start = 0;
    }
}

impl<const N: usize> Default for LineReader<N> {
    fn default() -> Self {
        Self::new()
    }
}
