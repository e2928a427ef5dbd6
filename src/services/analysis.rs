use std::sync::Arc;
use std::time::Instant;

use crate::models::analysis::{AnalysisResult, Lang};
use crate::services::completion::{CompletionError, CompletionService};
use crate::services::extract;
use crate::services::guard::{GuardAction, LanguageGuard};
use crate::services::prompt;
use crate::services::validation;

/// Runs one ingredients analysis against the completion service.
///
/// Steps:
/// - schema-constrained completion request in the resolved language
/// - resilient JSON extraction
/// - allow-list normalization
/// - language guard (at most one corrective request)
pub struct Analyzer {
    completion: Arc<dyn CompletionService>,
    guard: LanguageGuard,
}

impl Analyzer {
    pub fn new(completion: Arc<dyn CompletionService>, guard: LanguageGuard) -> Self {
        Self { completion, guard }
    }

    pub async fn analyze(
        &self,
        ingredients_text: &str,
        lang: Lang,
    ) -> Result<AnalysisResult, AnalysisError> {
        let start = Instant::now();

        let raw = self
            .completion
            .complete(prompt::analysis_request(ingredients_text, lang))
            .await?;

        let parsed = extract::extract_object(&raw);
        let mut result = validation::normalize(&parsed, lang);

        let action = self.guard.enforce(self.completion.as_ref(), &mut result).await;
        if action != GuardAction::Unchanged {
            metrics::counter!(
                "language_corrections_total",
                "lang" => lang.to_string(),
                "method" => action.to_string()
            )
            .increment(1);
        }

        metrics::histogram!("analysis_duration_seconds").record(start.elapsed().as_secs_f64());
        metrics::counter!("analysis_verdicts_total", "verdict" => result.verdict.to_string())
            .increment(1);

        tracing::info!(
            lang = %lang,
            verdict = %result.verdict,
            guard = %action,
            "Analysis complete"
        );

        Ok(result)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Completion request failed: {0}")]
    Completion(#[from] CompletionError),
}
