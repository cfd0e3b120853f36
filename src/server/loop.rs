// Server loop module
// Accepts connections until the process exits

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Accept loop for the asset server.
///
/// Must run inside a `LocalSet`: every connection is a `spawn_local` task, so
/// requests interleave on one thread. Accept errors are logged and the loop goes on.
pub async fn start_server_loop(listener: TcpListener, state: Arc<AppState>) {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                accept_connection(stream, peer_addr, &state, &active_connections);
            }
            Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
        }
    }
}
