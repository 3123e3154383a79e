use embedded_io_async::{Read, Write};

use crate::reader::{LineEvent, LineReader};
use crate::request::{self, Route};
use crate::{Error, HttpResult, response};

const RX_CHUNK_SIZE: usize = 64;

/// Physical output collaborator: a single digital line driven high or low.
pub trait LedOutput {
    fn set(&mut self, on: bool);
}

impl<T: LedOutput> LedOutput for &mut T {
    fn set(&mut self, on: bool) {
        T::set(self, on);
    }
}

/// How a connection ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Served {
    /// The request headers completed and a response was written.
    Responded,
    /// The peer closed before finishing its headers; nothing was written.
    Disconnected,
}

/// Minimal single-connection HTTP server for the LED control page.
///
/// Owns the LED state across connections and drives the physical output
/// through the [`LedOutput`] port. One connection is drained and answered
/// at a time; as long as a single task owns the server, the state has a
/// single mutator and needs no locking. Introducing concurrent serving
/// would require guarding the state explicitly.
pub struct LineHttpServer<O: LedOutput> {
    led_on: bool,
    output: O,
}

impl<O: LedOutput> LineHttpServer<O> {
    /// The LED state starts off; the physical output is not touched until
    /// a recognized request arrives.
    pub const fn new(output: O) -> Self {
        Self {
            led_on: false,
            output,
        }
    }

    /// Current LED state, as rendered into the page body.
    pub fn led_on(&self) -> bool {
        self.led_on
    }

    /// Serve one request/response cycle on an established connection.
    ///
    /// Reads until the blank line ending the request headers, applies a
    /// matching route and writes the response. A peer that disconnects
    /// earlier leaves the state untouched and gets no bytes back.
    pub async fn serve<S: Read + Write>(&mut self, socket: &mut S) -> HttpResult<Served> {
        let mut reader = LineReader::new();
        let mut buf = [0u8; RX_CHUNK_SIZE];

        loop {
            let n = socket.read(&mut buf).await.map_err(|_| Error::Closed)?;
            if n == 0 {
                return Ok(Served::Disconnected);
            }
            for &byte in &buf[..n] {
                if reader.feed(byte)? == LineEvent::EndOfHeaders {
                    self.apply_route(&reader);
                    return self.respond(socket).await;
                }
            }
        }
    }

    fn apply_route(&mut self, reader: &LineReader) {
        let route = reader
            .request_line()
            .and_then(|line| core::str::from_utf8(line).ok())
            .and_then(request::parse_request_line)
            .and_then(|request| Route::matching(&request));

        if let Some(route) = route {
            self.led_on = route.led_on();
            // Re-driven on every match, also when the state did not change.
            self.output.set(self.led_on);
        }
    }

    async fn respond<S: Write>(&mut self, socket: &mut S) -> HttpResult<Served> {
        let bytes = response::render(self.led_on)?;
        socket.write_all(&bytes).await.map_err(|_| Error::Closed)?;
        socket.flush().await.map_err(|_| Error::Closed)?;
        Ok(Served::Responded)
    }
}
