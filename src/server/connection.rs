// Connection handling module
// Accepts a single TCP connection and serves HTTP/1.1 on it

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Accept a connection, enforcing the optional connection limit.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state
/// * `conn_counter` - Active connection counter
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    conn_counter: &Arc<AtomicUsize>,
) {
    // Increment first, then check, so concurrent accepts cannot both slip under the limit
    let prev_count = conn_counter.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            conn_counter.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection rejected."
            ));
            drop(stream);
            return;
        }
    }

    handle_connection(stream, peer_addr, Arc::clone(state), Arc::clone(conn_counter));
}

/// Serve one connection on the current `LocalSet`.
///
/// Keep-alive and the optional timeout come from the performance config;
/// the counter is decremented when the connection ends.
fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
    conn_counter: Arc<AtomicUsize>,
) {
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);
        let performance = state.config.performance.clone();
        // Connection-level failures count as request failures: reported only with the access log on
        let report = state.access_log();

        let mut builder = http1::Builder::new();
        builder.keep_alive(performance.keep_alive);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&state), peer_addr)),
        );

        if performance.connection_timeout == 0 {
            if let Err(err) = conn.await {
                if report {
                    logger::log_connection_error(&peer_addr, &err);
                }
            }
        } else {
            let timeout = Duration::from_secs(performance.connection_timeout);
            match tokio::time::timeout(timeout, conn).await {
                Ok(Err(err)) if report => logger::log_connection_error(&peer_addr, &err),
                Err(_) if report => logger::log_connection_timeout(&peer_addr, timeout.as_secs()),
                _ => {}
            }
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}
