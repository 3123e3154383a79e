use heapless::Vec;

use crate::{Error, HttpResult};

/// Capacity of the line buffer. Request lines for the recognized routes are
/// well under this; anything longer aborts the connection.
pub const MAX_LINE_LEN: usize = 256;

/// Outcome of feeding one byte to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    /// Byte consumed, the current line is still open.
    Byte,
    /// A non-empty line was completed.
    Line,
    /// The blank line ending the request headers was seen.
    EndOfHeaders,
}

/// Accumulates a client byte stream into logical lines.
///
/// Line feeds terminate lines and carriage returns are dropped, so the
/// current line never contains either. The first completed non-empty line
/// is captured verbatim as the request line; later header lines are only
/// counted towards end-of-headers detection.
pub struct LineReader {
    line: Vec<u8, MAX_LINE_LEN>,
    request_line: Option<Vec<u8, MAX_LINE_LEN>>,
}

impl LineReader {
    pub const fn new() -> Self {
        Self {
            line: Vec::new(),
            request_line: None,
        }
    }

    /// Consume one byte from the stream.
    pub fn feed(&mut self, byte: u8) -> HttpResult<LineEvent> {
        match byte {
            b'\n' => {
                if self.line.is_empty() {
                    return Ok(LineEvent::EndOfHeaders);
                }
                if self.request_line.is_none() {
                    self.request_line = Some(self.line.clone());
                }
                self.line.clear();
                Ok(LineEvent::Line)
            }
            b'\r' => Ok(LineEvent::Byte),
            _ => {
                self.line.push(byte).map_err(|_| Error::LineTooLong)?;
                Ok(LineEvent::Byte)
            }
        }
    }

    /// The captured request line, if one full line has been seen.
    pub fn request_line(&self) -> Option<&[u8]> {
        self.request_line.as_deref()
    }

    /// Bytes accumulated since the last line terminator.
    pub fn current_line(&self) -> &[u8] {
        &self.line
    }
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(reader: &mut LineReader, bytes: &[u8]) -> LineEvent {
        let mut last = LineEvent::Byte;
        for &byte in bytes {
            last = reader.feed(byte).unwrap();
        }
        last
    }

    #[test]
    fn current_line_never_holds_terminators() {
        let mut reader = LineReader::new();
        for &byte in b"GET /LED_ON HTTP/1.1\r\nHost: x\r\nAccept: */*\r\n\r\n" {
            let _ = reader.feed(byte).unwrap();
            assert!(!reader.current_line().contains(&b'\r'));
            assert!(!reader.current_line().contains(&b'\n'));
        }
    }

    #[test]
    fn captures_first_line_as_request_line() {
        let mut reader = LineReader::new();
        assert_eq!(
            feed_all(&mut reader, b"GET /LED_ON HTTP/1.1\r\n"),
            LineEvent::Line
        );
        assert_eq!(reader.request_line(), Some(&b"GET /LED_ON HTTP/1.1"[..]));
        assert!(reader.current_line().is_empty());

        // Header lines do not overwrite the captured request line.
        feed_all(&mut reader, b"Host: x\r\n");
        assert_eq!(reader.request_line(), Some(&b"GET /LED_ON HTTP/1.1"[..]));
    }

    #[test]
    fn blank_line_signals_end_of_headers() {
        let mut reader = LineReader::new();
        assert_eq!(
            feed_all(&mut reader, b"GET / HTTP/1.1\r\nHost: x\r\n\r\n"),
            LineEvent::EndOfHeaders
        );
    }

    #[test]
    fn bare_line_feed_also_terminates_lines() {
        let mut reader = LineReader::new();
        assert_eq!(feed_all(&mut reader, b"GET / HTTP/1.1\n\n"), LineEvent::EndOfHeaders);
        assert_eq!(reader.request_line(), Some(&b"GET / HTTP/1.1"[..]));
    }

    #[test]
    fn overlong_line_is_rejected() {
        let mut reader = LineReader::new();
        for _ in 0..MAX_LINE_LEN {
            reader.feed(b'a').unwrap();
        }
        assert_eq!(reader.feed(b'a'), Err(Error::LineTooLong));
    }
}
