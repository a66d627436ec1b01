//! Panel HTTP Server
//!
//! Serves the LED control page on port 80, one client at a time.

use embassy_net::Stack;

use crate::config::HTTP_PORT;
use crate::infrastructure::services::http::HttpServer;
use crate::infrastructure::types::PanelHttpController;

const RX_BUFFER_SIZE: usize = 1536;
const TX_BUFFER_SIZE: usize = 4096;

#[embassy_executor::task]
pub async fn http_server_task(stack: Stack<'static>, mut controller: PanelHttpController) {
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];

    let mut server = HttpServer::new(&mut controller);
    server
        .listen_and_serve(stack, HTTP_PORT, &mut rx_buffer, &mut tx_buffer)
        .await;
}
