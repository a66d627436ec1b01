mod http_server;
mod transport;

pub use http_server::HttpServer;
pub use transport::TcpTransport;
