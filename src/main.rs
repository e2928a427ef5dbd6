use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::EnvFilter;

use gluten_check::app_state::AppState;
use gluten_check::config::AppConfig;
use gluten_check::routes;
use gluten_check::services::completion::OpenAiClient;
use gluten_check::services::guard::LanguageGuard;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing gluten-check server");

    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    routes::metrics::describe_metrics();

    tracing::info!(
        base_url = %config.openai_base_url,
        model = %config.openai_model,
        timeout_secs = config.completion_timeout_secs,
        "Initializing completion client"
    );
    let completion = OpenAiClient::new(
        &config.openai_base_url,
        &config.openai_api_key,
        &config.openai_model,
        config.completion_timeout(),
    )
    .expect("Failed to initialize completion client");

    tracing::info!(policy = %config.language_guard, "Language guard configured");
    let state = AppState::new(
        Arc::new(completion),
        LanguageGuard::new(config.language_guard),
        config.version(),
    );

    let app = routes::app(state, Some(Arc::new(prometheus_handle)), config.max_body_bytes);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
