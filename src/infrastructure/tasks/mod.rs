mod heartbeat;
mod http_server;
mod network;

pub use heartbeat::heartbeat_task;
pub use http_server::http_server_task;
pub use network::network_runner_task;
