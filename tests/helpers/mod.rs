//! Test helper utilities for API testing

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gluten_check::app_state::AppState;
use gluten_check::routes;
use gluten_check::services::completion::{CompletionError, CompletionRequest, CompletionService};
use gluten_check::services::guard::{GuardPolicy, LanguageGuard};
use serde_json::Value;

pub const TEST_VERSION: &str = "test-build-1";

/// Completion service that replays scripted replies in order and records
/// every request it receives.
#[derive(Default)]
pub struct ScriptedCompletion {
    replies: Mutex<VecDeque<Result<String, u16>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: &str) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(self, status: u16) -> Self {
        self.replies.lock().unwrap().push_back(Err(status));
        self
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for ScriptedCompletion {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        self.requests.lock().unwrap().push(request);
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(status)) => Err(CompletionError::Status {
                status,
                body: "scripted failure".to_string(),
            }),
            None => Err(CompletionError::MissingContent),
        }
    }
}

/// A running server bound to an ephemeral local port.
pub struct TestApp {
    pub base_url: String,
    pub completion: Arc<ScriptedCompletion>,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn analyze_url(&self) -> String {
        format!("{}/api/analyze", self.base_url)
    }

    /// POST a JSON body to /api/analyze and return status and parsed body.
    pub async fn analyze(&self, body: Value, accept_language: Option<&str>) -> (u16, Value) {
        let mut request = self.client.post(self.analyze_url()).json(&body);
        if let Some(lang) = accept_language {
            request = request.header("accept-language", lang);
        }
        let response = request.send().await.expect("request failed");
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.expect("response was not JSON");
        (status, body)
    }
}

pub async fn spawn_app(completion: ScriptedCompletion) -> TestApp {
    spawn_app_with_policy(completion, GuardPolicy::Rewrite).await
}

pub async fn spawn_app_with_policy(completion: ScriptedCompletion, policy: GuardPolicy) -> TestApp {
    let completion = Arc::new(completion);
    let state = AppState::new(completion.clone(), LanguageGuard::new(policy), TEST_VERSION);
    let app = routes::app(state, None, 64 * 1024);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server error");
    });

    TestApp {
        base_url: format!("http://{}", addr),
        completion,
        client: reqwest::Client::new(),
    }
}

pub fn is_arabic(text: &str) -> bool {
    text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}
