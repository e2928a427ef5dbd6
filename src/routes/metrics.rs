use std::sync::Arc;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;

/// Register descriptions for the analysis metrics.
pub fn describe_metrics() {
    metrics::describe_counter!("analysis_requests_total", "Total analyze requests received");
    metrics::describe_counter!(
        "analysis_verdicts_total",
        "Completed analyses, labelled by verdict"
    );
    metrics::describe_counter!(
        "analysis_failures_total",
        "Analyses that failed with a server error"
    );
    metrics::describe_counter!(
        "language_corrections_total",
        "Explanations corrected by the language guard, labelled by lang and method"
    );
    metrics::describe_histogram!(
        "analysis_duration_seconds",
        "Time spent analyzing one ingredients list, including corrective calls"
    );
}

/// GET /metrics — Prometheus text exposition.
pub async fn prometheus_metrics(State(handle): State<Arc<PrometheusHandle>>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    )
}
