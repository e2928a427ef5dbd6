use std::sync::Arc;

use crate::services::analysis::Analyzer;
use crate::services::completion::CompletionService;
use crate::services::guard::LanguageGuard;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub version: Arc<str>,
}

impl AppState {
    pub fn new(
        completion: Arc<dyn CompletionService>,
        guard: LanguageGuard,
        version: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            analyzer: Arc::new(Analyzer::new(completion, guard)),
            version: version.into(),
        }
    }
}
