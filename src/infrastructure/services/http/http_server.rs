use embassy_net::{Stack, tcp::TcpSocket};
use panel_core::http::{HttpConnection, HttpHandler};

use super::TcpTransport;

/// Single-client HTTP server.
///
/// Connections are served one after another by the calling task. Sockets
/// have no timeout, so a client that never finishes its headers blocks
/// the server.
pub struct HttpServer<'a, H: HttpHandler> {
    handler: &'a mut H,
}

impl<'a, H: HttpHandler> HttpServer<'a, H> {
    pub fn new(handler: &'a mut H) -> Self {
        Self { handler }
    }

    pub async fn listen_and_serve(
        &mut self,
        stack: Stack<'static>,
        port: u16,
        rx_buffer: &mut [u8],
        tx_buffer: &mut [u8],
    ) {
        loop {
            let mut socket = TcpSocket::new(stack, rx_buffer, tx_buffer);
            socket.set_timeout(None);

            if let Err(e) = socket.accept(port).await {
                log::warn!("http_server: accept error: {:?}", e);
                continue;
            }

            let conn = HttpConnection::new(TcpTransport::new(socket));
            if let Err(e) = self.handler.handle_request(conn).await {
                log::warn!("http_server: connection error: {:?}", e);
            }
        }
    }
}
