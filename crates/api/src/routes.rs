use std::sync::Arc;
use std::time::Duration;

use analysis::{AnalysisGenerator, RepositoryAnalysis};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use common::RepoPath;
use prometheus::Encoder;
use serde_json::json;
use tracing::instrument;

use crate::error::{ApiError, ApiResult};
use crate::metrics::{ANALYSES_GENERATED_TOTAL, ANALYZE_DURATION, ANALYZE_REJECTIONS_TOTAL};

#[derive(Clone)]
pub struct ApiState {
    pub generator: AnalysisGenerator,
    /// Artificial processing time applied to accepted analyze requests.
    pub simulated_delay: Duration,
    pub metrics_path: &'static str,
}

pub fn build_router(state: Arc<ApiState>) -> Router {
    let metrics_path: &'static str = state.metrics_path;
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/analyze/:repo_path", get(analyze_repo))
        .route(metrics_path, get(metrics))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// One path segment; `owner/repo` must arrive with the slash
/// percent-encoded as `%2F`.
#[instrument(skip(state))]
async fn analyze_repo(
    State(state): State<Arc<ApiState>>,
    Path(repo_path): Path<String>,
) -> ApiResult<Json<RepositoryAnalysis>> {
    let repo: RepoPath = match repo_path.parse() {
        Ok(repo) => repo,
        Err(err) => {
            ANALYZE_REJECTIONS_TOTAL.inc();
            return Err(ApiError::from(err));
        }
    };

    let timer = ANALYZE_DURATION.start_timer();
    tokio::time::sleep(state.simulated_delay).await;

    let source = if state.generator.catalog().get(&repo.full_name()).is_some() {
        "template"
    } else {
        "generated"
    };
    let mut rng = rand::thread_rng();
    let analysis = state.generator.generate(&repo, &mut rng);
    ANALYSES_GENERATED_TOTAL.with_label_values(&[source]).inc();
    timer.observe_duration();

    Ok(Json(analysis))
}

async fn metrics() -> ApiResult<impl IntoResponse> {
    let encoder = prometheus::TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    let content_type = encoder.format_type().to_string();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|err| ApiError::Internal(err.to_string()))?;
    Ok((
        axum::http::StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, content_type)],
        buffer,
    ))
}
