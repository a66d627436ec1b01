use embassy_net::tcp::{Error as TcpError, TcpSocket};
use embedded_io_async::{ErrorType, Read, Write};
use panel_core::http::Transport;

/// Accepted TCP connection
pub struct TcpTransport<'a> {
    socket: TcpSocket<'a>,
}

impl<'a> TcpTransport<'a> {
    pub fn new(socket: TcpSocket<'a>) -> Self {
        Self { socket }
    }
}

impl ErrorType for TcpTransport<'_> {
    type Error = TcpError;
}

impl Read for TcpTransport<'_> {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, TcpError> {
        self.socket.read(buf).await
    }
}

impl Write for TcpTransport<'_> {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, TcpError> {
        self.socket.write(buf).await
    }

    async fn flush(&mut self) -> Result<(), TcpError> {
        self.socket.flush().await
    }
}

impl Transport for TcpTransport<'_> {
    async fn close(&mut self) -> Result<(), TcpError> {
        self.socket.close();
        // Flushing a closed socket waits until the close is acknowledged
        self.socket.flush().await
    }
}
