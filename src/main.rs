use quick_info::frontend::start_all;
use quick_info::logging;
use quick_info::shared::config::CONFIG;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init()?;

    info!(
        http_addr = %CONFIG.server.http_addr,
        parallel = CONFIG.query.parallel,
        "QuickInfo is starting..."
    );
    start_all().await?;

    Ok(())
}
