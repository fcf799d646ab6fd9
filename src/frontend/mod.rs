pub mod context;
pub mod http;
pub mod server_state;

use context::FrontendContext;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn start_all() -> anyhow::Result<()> {
    let ctx = FrontendContext::from_config();

    let state = Arc::clone(&ctx.server_state);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown requested");
                state.signal_shutdown();
            }
            Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
        }
    });

    http::listener::run_http_server(ctx).await
}
