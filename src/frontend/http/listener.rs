use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::frontend::context::FrontendContext;

use super::answers::ANSWERS_PATH;
use super::handler::handle_request;

pub async fn run_http_server(ctx: Arc<FrontendContext>) -> anyhow::Result<()> {
    let addr: SocketAddr = ctx.options.http_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("HTTP server running at http://{addr}{ANSWERS_PATH}");
    serve(listener, ctx).await
}

/// Accept loop over an already bound listener. Returns once shutdown is signalled.
pub async fn serve(listener: TcpListener, ctx: Arc<FrontendContext>) -> anyhow::Result<()> {
    let keep_alive = ctx.options.keep_alive;
    let connection_semaphore = match ctx.options.max_connections {
        0 => None,
        max => Some(Arc::new(Semaphore::new(max))),
    };

    loop {
        if ctx.server_state.is_shutting_down() {
            info!("HTTP server shutting down, not accepting new connections");
            break;
        }

        let permit = match connection_semaphore {
            Some(ref semaphore) => Some(Arc::clone(semaphore).acquire_owned().await?),
            None => None,
        };

        // Polling the flag keeps accept cancellable on shutdown
        let accept_result = tokio::select! {
            result = listener.accept() => result,
            _ = async {
                loop {
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                    if ctx.server_state.is_shutting_down() {
                        break;
                    }
                }
            } => {
                info!("HTTP server shutting down, stopping accept loop");
                break;
            }
        };

        let (stream, peer_addr) = match accept_result {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Failed to accept HTTP connection: {}", e);
                continue;
            }
        };
        let io = TokioIo::new(stream);
        let ctx = Arc::clone(&ctx);

        tokio::spawn(async move {
            // Held until the connection closes
            let _permit = permit;

            let mut builder = hyper::server::conn::http1::Builder::new();
            builder.keep_alive(keep_alive);

            if let Err(err) = builder
                .serve_connection(
                    io,
                    service_fn(move |req| handle_request(req, Arc::clone(&ctx), Some(peer_addr))),
                )
                .await
            {
                let msg = err.to_string();
                if msg.contains("connection closed")
                    || msg.contains("broken pipe")
                    || msg.contains("Connection reset")
                {
                    debug!("Connection from {} ended: {}", peer_addr, msg);
                } else {
                    warn!("Error serving connection from {}: {:?}", peer_addr, err);
                }
            }
        });
    }

    if ctx.server_state.pending_operations_count() > 0 {
        info!("HTTP server waiting for active connections to complete...");
        tokio::time::sleep(tokio::time::Duration::from_secs(2)).await;
    }

    info!("HTTP server shutdown complete");
    Ok(())
}
