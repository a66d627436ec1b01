use embedded_io_async::{Read, Write};
use heapless::String;

use super::{
    HttpError,
    HttpResult,
    headers::{ResponseHeaders, parse_request_target},
    line::LineReader,
};

const LINE_BUFFER_SIZE: usize = 512;
const HEADER_BUFFER_SIZE: usize = 64;
pub const MAX_TARGET_LEN: usize = 128;

/// Byte stream of a single accepted client connection.
#[allow(async_fn_in_trait)]
pub trait Transport: Read + Write {
    /// Close the connection and wait until it is fully closed.
    async fn close(&mut self) -> Result<(), Self::Error>;
}

/// Handler for one accepted connection.
#[allow(async_fn_in_trait)]
pub trait HttpHandler {
    async fn handle_request<T: Transport>(&mut self, conn: HttpConnection<T>) -> HttpResult;
}

/// Parsed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Request target. Longer targets keep their tail, as routing matches
    /// on suffixes.
    pub target: String<MAX_TARGET_LEN>,
}

/// HTTP connection context
pub struct HttpConnection<T: Transport> {
    transport: T,
    lines: LineReader<LINE_BUFFER_SIZE>,
}

impl<T: Transport> HttpConnection<T> {
    pub const fn new(transport: T) -> Self {
        Self {
            transport,
            lines: LineReader::new(),
        }
    }

    /// Read the request line and skip the headers.
    ///
    /// A request line that does not fit the line buffer is rejected, since
    /// the end of its target would be lost.
    ///
    /// Header skipping has no bound: a client that keeps the connection open
    /// without ever sending the blank line keeps this call pending.
    pub async fn read_request(&mut self) -> Result<Request, HttpError> {
        let request = {
            let line = self
                .lines
                .read_line(&mut self.transport)
                .await
                .map_err(HttpError::from_io)?
                .ok_or(HttpError::Closed)?;
            if line.is_truncated() {
                return Err(HttpError::Parse);
            }
            let line = core::str::from_utf8(&line).map_err(|_| HttpError::Parse)?;
            let target = parse_request_target(line).ok_or(HttpError::Parse)?;
            Request {
                target: tail_of(target),
            }
        };

        loop {
            match self
                .lines
                .read_line(&mut self.transport)
                .await
                .map_err(HttpError::from_io)?
            {
                None => return Err(HttpError::Closed),
                Some(line) if line.is_empty() => break,
                Some(_) => {}
            }
        }

        Ok(request)
    }

    /// Write headers and body, then flush.
    pub async fn write_response(
        &mut self,
        headers: &ResponseHeaders,
        body: &[u8],
    ) -> HttpResult {
        let mut head = String::<HEADER_BUFFER_SIZE>::new();
        headers.write_to(&mut head)?;

        self.transport
            .write_all(head.as_bytes())
            .await
            .map_err(HttpError::from_io)?;
        self.transport
            .write_all(body)
            .await
            .map_err(HttpError::from_io)?;
        self.transport.flush().await.map_err(HttpError::from_io)
    }

    /// Close the connection and wait until it is gone.
    pub async fn close(mut self) -> HttpResult {
        self.transport.close().await.map_err(HttpError::from_io)
    }
}

fn tail_of(target: &str) -> String<MAX_TARGET_LEN> {
    let mut cut = target.len().saturating_sub(MAX_TARGET_LEN);
    while !target.is_char_boundary(cut) {
        cut += 1;
    }
    let mut tail = String::new();
    let _ = tail.push_str(&target[cut..]);
    tail
}
