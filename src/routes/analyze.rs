use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::HeaderMap;
use axum::Json;

use crate::app_state::AppState;
use crate::error::AppError;
use crate::models::analysis::{AnalysisRequest, AnalysisResult};
use crate::services::language;

/// POST /api/analyze — classify an ingredients list for gluten content.
///
/// The body is read as raw bytes so that a missing content type or malformed
/// JSON is reported as missing ingredients rather than an extractor rejection.
pub async fn analyze_ingredients(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AnalysisResult>, AppError> {
    metrics::counter!("analysis_requests_total").increment(1);

    let request = AnalysisRequest::from_body(&body).ok_or(AppError::MissingIngredients)?;

    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let lang = language::resolve(
        request.language.as_deref(),
        &request.ingredients_text,
        accept_language,
    );

    tracing::debug!(lang = %lang, len = request.ingredients_text.len(), "Analyzing ingredients");

    let result = state.analyzer.analyze(&request.ingredients_text, lang).await?;
    Ok(Json(result))
}

/// Any method other than POST on /api/analyze.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
