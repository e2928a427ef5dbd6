use std::str::FromStr;

use serde_json::{Map, Value};

use crate::models::analysis::{AnalysisResult, Lang, Verdict};

/// Placeholder used when no critical ingredient was identified.
pub const NOT_APPLICABLE: &str = "N/A";

/// Fallback verdict for anything outside the allow-list.
pub const DEFAULT_VERDICT: Verdict = Verdict::AppearsGlutenFree;

fn trimmed_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Normalize a parsed completion object into an `AnalysisResult`.
///
/// - `verdict` outside the allow-list becomes `appears_gluten_free`
/// - blank or missing `criticalIngredient` becomes `"N/A"`
/// - blank or missing `explanation` becomes `""` and is left to the language guard
pub fn normalize(map: &Map<String, Value>, lang: Lang) -> AnalysisResult {
    let verdict = map
        .get("verdict")
        .and_then(Value::as_str)
        .and_then(|v| Verdict::from_str(v.trim()).ok())
        .unwrap_or_else(|| {
            tracing::warn!(raw = ?map.get("verdict"), "Unrecognized verdict, using default");
            DEFAULT_VERDICT
        });

    let critical_ingredient =
        trimmed_string(map, "criticalIngredient").unwrap_or_else(|| NOT_APPLICABLE.to_string());

    let explanation = trimmed_string(map, "explanation").unwrap_or_default();

    AnalysisResult {
        verdict,
        critical_ingredient,
        explanation,
        lang,
    }
}
