use serde::Deserialize;
use strum::{Display, EnumString};

use crate::models::analysis::{AnalysisResult, Lang, Verdict};
use crate::services::completion::CompletionService;
use crate::services::language;
use crate::services::prompt;
use crate::services::validation::NOT_APPLICABLE;

/// Fixed sentence used when a corrective rewrite does not produce usable text.
pub const ENGLISH_FALLBACK: &str = "A detailed explanation is not available in English.";
pub const ARABIC_FALLBACK: &str = "لا يتوفر شرح مفصل باللغة العربية.";

/// How a wrong-script explanation is corrected.
#[derive(Debug, Clone, Copy, Default, Deserialize, EnumString, Display, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GuardPolicy {
    /// One corrective completion request, then the fixed fallback sentence.
    #[default]
    Rewrite,
    /// Local templated sentence, no external call.
    Template,
}

/// What the guard did to the explanation.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum GuardAction {
    Unchanged,
    Templated,
    Rewritten,
    Fallback,
}

pub fn fallback_sentence(lang: Lang) -> &'static str {
    match lang {
        Lang::En => ENGLISH_FALLBACK,
        Lang::Ar => ARABIC_FALLBACK,
    }
}

/// Deterministic explanation derived from the verdict and critical ingredient.
pub fn templated_explanation(verdict: Verdict, critical_ingredient: &str, lang: Lang) -> String {
    let ingredient = Some(critical_ingredient)
        .filter(|i| *i != NOT_APPLICABLE && !i.is_empty())
        .filter(|i| language::conforms(i, lang) || lang == Lang::Ar);

    match (lang, verdict, ingredient) {
        (Lang::En, Verdict::ContainsGluten, Some(i)) => {
            format!("This product contains gluten because it includes {i}.")
        }
        (Lang::En, Verdict::ContainsGluten, None) => {
            "This product contains an ingredient that is a source of gluten.".to_string()
        }
        (Lang::En, Verdict::MayContainGluten, Some(i)) => {
            format!("This product may contain gluten because of {i}.")
        }
        (Lang::En, Verdict::MayContainGluten, None) => {
            "This product may contain gluten through a derived ingredient or cross-contamination."
                .to_string()
        }
        (Lang::En, Verdict::AppearsGlutenFree, _) => {
            "No gluten sources were identified in this ingredients list.".to_string()
        }
        (Lang::Ar, Verdict::ContainsGluten, Some(i)) => {
            format!("يحتوي هذا المنتج على الغلوتين لأنه يتضمن {i}.")
        }
        (Lang::Ar, Verdict::ContainsGluten, None) => {
            "يحتوي هذا المنتج على مكون يعد مصدرا للغلوتين.".to_string()
        }
        (Lang::Ar, Verdict::MayContainGluten, Some(i)) => {
            format!("قد يحتوي هذا المنتج على الغلوتين بسبب {i}.")
        }
        (Lang::Ar, Verdict::MayContainGluten, None) => {
            "قد يحتوي هذا المنتج على الغلوتين بسبب مكون مشتق أو تلوث عرضي.".to_string()
        }
        (Lang::Ar, Verdict::AppearsGlutenFree, _) => {
            "لم يتم العثور على مصادر للغلوتين في قائمة المكونات هذه.".to_string()
        }
    }
}

/// Post-validation language conformance stage.
///
/// A conformant explanation passes through untouched. An empty one is
/// replaced by the templated sentence. A wrong-script one is corrected once
/// according to the policy; a failed correction yields the fixed fallback.
#[derive(Debug, Clone, Copy)]
pub struct LanguageGuard {
    policy: GuardPolicy,
}

impl LanguageGuard {
    pub fn new(policy: GuardPolicy) -> Self {
        Self { policy }
    }

    pub async fn enforce(
        &self,
        completion: &dyn CompletionService,
        result: &mut AnalysisResult,
    ) -> GuardAction {
        let lang = result.lang;

        if language::conforms(&result.explanation, lang) {
            return GuardAction::Unchanged;
        }

        if result.explanation.is_empty() || self.policy == GuardPolicy::Template {
            result.explanation =
                templated_explanation(result.verdict, &result.critical_ingredient, lang);
            return GuardAction::Templated;
        }

        tracing::info!(lang = %lang, "Explanation in wrong script, requesting rewrite");

        match completion
            .complete(prompt::rewrite_request(&result.explanation, lang))
            .await
        {
            Ok(text) if language::conforms(text.trim(), lang) => {
                result.explanation = text.trim().to_string();
                GuardAction::Rewritten
            }
            Ok(_) => {
                tracing::warn!(lang = %lang, "Rewrite still non-conformant, using fallback");
                result.explanation = fallback_sentence(lang).to_string();
                GuardAction::Fallback
            }
            Err(e) => {
                tracing::warn!(error = %e, lang = %lang, "Rewrite request failed, using fallback");
                result.explanation = fallback_sentence(lang).to_string();
                GuardAction::Fallback
            }
        }
    }
}
