use std::sync::Arc;
use std::time::Duration;

use analysis::AnalysisGenerator;
use anyhow::Result;
use api::{build_router, ApiState};
use axum::Router;
use common::{config::AppConfig, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging("info");
    let config = AppConfig::load()?;
    let metrics_path: &'static str =
        Box::leak(config.observability.metrics_path.clone().into_boxed_str());
    let state = Arc::new(ApiState {
        generator: AnalysisGenerator::default(),
        simulated_delay: Duration::from_millis(config.analyzer.simulated_delay_ms),
        metrics_path,
    });
    let app: Router = build_router(state);

    let addr: std::net::SocketAddr = config.api.bind.parse()?;
    info!("api listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
