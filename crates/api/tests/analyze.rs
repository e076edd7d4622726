use std::sync::Arc;
use std::time::Duration;

use analysis::AnalysisGenerator;
use axum::body::to_bytes;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::util::ServiceExt;

use api::{build_router, routes::ApiState};

fn setup_app(simulated_delay: Duration) -> Router {
    let state = Arc::new(ApiState {
        generator: AnalysisGenerator::default(),
        simulated_delay,
        metrics_path: "/metrics",
    });
    build_router(state)
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(
        Request::get(uri)
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn analyze_returns_a_full_record_for_an_encoded_path() {
    let app = setup_app(Duration::ZERO);
    let res = get(app, "/api/analyze/foo%2Fbar").await;
    assert_eq!(res.status(), StatusCode::OK);

    let v = body_json(res).await;
    assert_eq!(v["repository"]["owner"], "foo");
    assert_eq!(v["repository"]["name"], "bar");
    assert_eq!(v["maturityClassification"], "production-ready");
    assert_eq!(v["sections"].as_array().unwrap().len(), 8);
    assert_eq!(v["insights"].as_array().unwrap().len(), 6);
    assert_eq!(v["languages"].as_array().unwrap().len(), 4);
    assert_eq!(v["improvements"].as_array().unwrap().len(), 8);

    let overall = v["scores"]["overallScore"].as_i64().unwrap();
    assert!((70..90).contains(&overall), "overallScore {}", overall);

    let activity = v["commitActivity"].as_array().unwrap();
    assert_eq!(activity.len(), 6);
    assert_eq!(activity[0]["month"], "Jul");
    assert_eq!(v["issueResolution"][5]["month"], "Dec");
}

#[tokio::test]
async fn analyze_serves_the_curated_template() {
    let app = setup_app(Duration::ZERO);
    let res = get(app, "/api/analyze/facebook%2Freact").await;
    assert_eq!(res.status(), StatusCode::OK);

    let v = body_json(res).await;
    assert_eq!(v["maturityClassification"], "scalable-foundation");
    assert_eq!(v["scores"]["overallScore"], 94);
    assert_eq!(v["repository"]["stars"], 225_000);
    assert!(v["executiveSummary"]
        .as_str()
        .unwrap()
        .starts_with("React represents the gold standard"));
}

#[tokio::test]
async fn analyze_rejects_a_path_without_a_slash() {
    let app = setup_app(Duration::ZERO);
    let res = get(app, "/api/analyze/just-a-name").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let v = body_json(res).await;
    assert_eq!(v["error"], "Invalid repository format. Use owner/repo format.");
    let details = v["details"].as_array().unwrap();
    assert!(!details.is_empty());
}

#[tokio::test]
async fn analyze_rejects_extra_segments() {
    let app = setup_app(Duration::ZERO);
    let res = get(app, "/api/analyze/a%2Fb%2Fc").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test(start_paused = true)]
async fn analyze_applies_the_simulated_delay_to_accepted_requests_only() {
    let app = setup_app(Duration::from_millis(800));

    let started = tokio::time::Instant::now();
    let res = get(app.clone(), "/api/analyze/acme%2Fwidget").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(800));

    let started = tokio::time::Instant::now();
    let res = get(app, "/api/analyze/just-a-name").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test]
async fn healthz_reports_ok() {
    let app = setup_app(Duration::ZERO);
    let res = get(app, "/healthz").await;
    assert_eq!(res.status(), StatusCode::OK);
    let v = body_json(res).await;
    assert_eq!(v["status"], "ok");
}

#[tokio::test]
async fn metrics_exposition_lists_analyze_series() {
    let app = setup_app(Duration::ZERO);
    let res = get(app.clone(), "/api/analyze/acme%2Fwidget").await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = get(app, "/metrics").await;
    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("api_analyses_generated_total"));
}
