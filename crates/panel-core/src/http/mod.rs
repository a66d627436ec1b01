pub mod connection;
pub mod headers;
pub mod line;

pub use connection::{HttpConnection, HttpHandler, Request, Transport};
pub use headers::{ContentType, ResponseHeaders, StatusCode, parse_request_target};
pub use line::{Line, LineReader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpError {
    /// Peer closed the connection before the request was complete
    Closed,
    Io(embedded_io::ErrorKind),
    /// Malformed or oversized request line
    Parse,
    FormatHeaders,
}

impl HttpError {
    pub fn from_io(err: impl embedded_io::Error) -> Self {
        HttpError::Io(err.kind())
    }
}

impl From<core::fmt::Error> for HttpError {
    fn from(_error: core::fmt::Error) -> Self {
        HttpError::FormatHeaders
    }
}

pub type HttpResult = Result<(), HttpError>;
