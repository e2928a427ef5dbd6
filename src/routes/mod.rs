pub mod analyze;
pub mod health;
pub mod metrics;
pub mod version;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::error::AppError;

/// Build the application router.
///
/// `/metrics` is only mounted when a Prometheus recorder handle is supplied.
pub fn app(
    state: AppState,
    prometheus: Option<Arc<PrometheusHandle>>,
    max_body_bytes: usize,
) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/analyze",
            post(analyze::analyze_ingredients).fallback(analyze::method_not_allowed),
        )
        .route("/api/version", get(version::version))
        .with_state(state);

    if let Some(handle) = prometheus {
        router = router.route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(handle),
        );
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(middleware::map_response(json_payload_too_large))
}

/// Replace the plain-text 413 from the body limit with the JSON error shape.
async fn json_payload_too_large(response: Response) -> Response {
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge.into_response();
    }
    response
}
