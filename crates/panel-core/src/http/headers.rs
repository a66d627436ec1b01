use core::fmt::Write;

pub type StatusCode = u16;

fn reason_phrase(code: StatusCode) -> &'static str {
    match code {
        200 => "OK",
        _ => "Unknown",
    }
}

/// HTTP Content Type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    TextHtml,
}

impl ContentType {
    /// Convert the content type to a string.
    pub const fn as_str(self) -> &'static str {
        match self {
            ContentType::TextHtml => "text/html",
        }
    }
}

/// Response Headers.
///
/// Responses are HTTP/1.0 and the connection is closed after each one, so
/// neither `Content-Length` nor `Connection` is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseHeaders {
    status: StatusCode,
    content_type: Option<ContentType>,
}

impl ResponseHeaders {
    /// Headers of a `200 OK` response.
    pub const fn success() -> Self {
        Self {
            status: 200,
            content_type: None,
        }
    }

    /// Set the content type.
    #[must_use]
    pub const fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Write the status line, headers and the blank separator line.
    pub fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error> {
        let reason = reason_phrase(self.status);
        write!(writer, "HTTP/1.0 {} {}\r\n", self.status, reason)?;
        if let Some(content_type) = self.content_type {
            write!(writer, "Content-type: {}\r\n", content_type.as_str())?;
        }
        write!(writer, "\r\n")?;
        Ok(())
    }
}

/// Extract the target from a request line.
///
/// Returns `None` when the line has fewer than two whitespace separated
/// tokens. The method is not checked; every method is served the same way.
pub fn parse_request_target(line: &str) -> Option<&str> {
    let mut parts = line.split_whitespace();
    let _method = parts.next()?;
    parts.next()
}
