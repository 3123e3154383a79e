//! Line-oriented HTTP request reader and minimal responder.
//!
//! Just enough HTTP/1.1 to run the legacy LED control page: accumulate the
//! request into logical lines, parse the request line once the blank line
//! ending the headers arrives, flip the LED for the two recognized routes
//! and write back a fixed HTML document. Transport-agnostic: the serve loop
//! works on anything implementing the `embedded-io-async` traits.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod reader;
pub mod request;
pub mod response;
pub mod server;

pub use reader::{LineEvent, LineReader};
pub use request::{Method, RequestLine, Route};
pub use server::{LedOutput, LineHttpServer, Served};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The peer closed or reset the connection before the response went out.
    Closed,
    /// A header line did not fit the reader's line buffer.
    LineTooLong,
    /// The rendered response did not fit the response buffer.
    ResponseOverflow,
}

impl From<core::fmt::Error> for Error {
    fn from(_error: core::fmt::Error) -> Self {
        Error::ResponseOverflow
    }
}

pub type HttpResult<T> = Result<T, Error>;
