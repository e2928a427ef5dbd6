use garde::Validate;
use serde::Serialize;
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};

/// Gluten classification returned to the caller.
#[derive(Debug, Clone, Copy, Serialize, EnumString, Display, AsRefStr, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Verdict {
    ContainsGluten,
    MayContainGluten,
    AppearsGlutenFree,
}

impl Verdict {
    pub const ALL: [Verdict; 3] = [
        Verdict::ContainsGluten,
        Verdict::MayContainGluten,
        Verdict::AppearsGlutenFree,
    ];
}

/// Response language. Only Arabic and English are supported.
#[derive(Debug, Clone, Copy, Serialize, EnumString, Display, AsRefStr, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Lang {
    Ar,
    En,
}

impl Lang {
    /// English name of the language, as used inside prompts.
    pub fn display_name(self) -> &'static str {
        match self {
            Lang::Ar => "Arabic",
            Lang::En => "English",
        }
    }
}

/// Validated body of `POST /api/analyze`.
#[derive(Debug, Clone, Validate)]
pub struct AnalysisRequest {
    #[garde(length(min = 1), custom(not_blank))]
    pub ingredients_text: String,

    #[garde(skip)]
    pub language: Option<String>,
}

fn not_blank(value: &str, _context: &()) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new("must not be blank"));
    }
    Ok(())
}

impl AnalysisRequest {
    /// Build a request from a raw JSON body.
    ///
    /// Returns `None` when the body is not JSON, `ingredientsText` is missing
    /// or not a string, or the text is blank. A non-string `language` is
    /// treated as absent.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        let value: Value = serde_json::from_slice(body).ok()?;
        let ingredients_text = value.get("ingredientsText")?.as_str()?.to_string();
        let language = value
            .get("language")
            .and_then(Value::as_str)
            .map(str::to_string);

        let request = Self {
            ingredients_text,
            language,
        };
        request.validate().ok()?;
        Some(request)
    }
}

/// Normalized analysis returned with status 200.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub verdict: Verdict,
    pub critical_ingredient: String,
    pub explanation: String,
    pub lang: Lang,
}
