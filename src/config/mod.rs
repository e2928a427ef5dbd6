use serde::Deserialize;
use std::time::Duration;

use crate::services::guard::GuardPolicy;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000")
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// API key for the completion service
    pub openai_api_key: String,

    /// Base URL of the OpenAI-compatible completion service
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    /// Chat model used for analysis
    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    /// Per-request timeout for completion calls, in seconds
    #[serde(default = "default_completion_timeout_secs")]
    pub completion_timeout_secs: u64,

    /// How wrong-script explanations are corrected ("rewrite" or "template")
    #[serde(default)]
    pub language_guard: GuardPolicy,

    /// Maximum accepted request body size in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Version reported by /api/version. Defaults to the crate version.
    pub build_version: Option<String>,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o".to_string()
}

fn default_completion_timeout_secs() -> u64 {
    20
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.completion_timeout_secs)
    }

    pub fn version(&self) -> String {
        self.build_version
            .clone()
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config: AppConfig = envy::from_iter(vars(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.openai_base_url, "https://api.openai.com");
        assert_eq!(config.openai_model, "gpt-4o");
        assert_eq!(config.completion_timeout(), Duration::from_secs(20));
        assert_eq!(config.language_guard, GuardPolicy::Rewrite);
        assert_eq!(config.max_body_bytes, 65536);
        assert_eq!(config.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_overrides() {
        let config: AppConfig = envy::from_iter(vars(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("COMPLETION_TIMEOUT_SECS", "15"),
            ("LANGUAGE_GUARD", "template"),
            ("BUILD_VERSION", "2024-06-01"),
        ]))
        .unwrap();
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.completion_timeout_secs, 15);
        assert_eq!(config.language_guard, GuardPolicy::Template);
        assert_eq!(config.version(), "2024-06-01");
    }

    #[test]
    fn test_missing_api_key() {
        let result: Result<AppConfig, _> = envy::from_iter(vars(&[("OPENAI_MODEL", "gpt-4o")]));
        assert!(result.is_err());
    }
}
