use serde_json::{json, Value};

use crate::models::analysis::{Lang, Verdict};
use crate::services::completion::{ChatMessage, CompletionRequest, ResponseSchema};

pub const SCHEMA_NAME: &str = "gluten_analysis";

/// ASCII-only pattern applied to English explanations.
pub const ASCII_PATTERN: &str = r"^[\x00-\x7F]*$";

fn system_prompt(lang: Lang) -> String {
    let language = lang.display_name();
    let mut prompt = format!(
        "You are an expert in gluten allergies and celiac disease. \
         Respond ONLY with a JSON object that has exactly the keys \"verdict\", \
         \"criticalIngredient\" and \"explanation\". \
         Key names must always stay in English exactly as written. \
         The value of \"verdict\" must be one of: \"contains_gluten\", \"may_contain_gluten\", \"appears_gluten_free\". \
         Write the values of \"criticalIngredient\" and \"explanation\" in {language} only."
    );
    match lang {
        Lang::En => prompt.push_str(" Use plain ASCII characters only."),
        Lang::Ar => prompt.push_str(" Use Arabic script for the explanation."),
    }
    prompt
}

fn example_json(lang: Lang) -> &'static str {
    match lang {
        Lang::En => {
            r#"{"verdict":"contains_gluten","criticalIngredient":"wheat flour","explanation":"Wheat flour is a direct source of gluten."}"#
        }
        Lang::Ar => {
            r#"{"verdict":"contains_gluten","criticalIngredient":"دقيق القمح","explanation":"دقيق القمح مصدر مباشر للغلوتين."}"#
        }
    }
}

fn user_prompt(ingredients_text: &str, lang: Lang) -> String {
    format!(
        "Analyze the following ingredients list accurately. Look for any explicit gluten source, \
         any ingredient that might be derived from a gluten source, and any cross-contamination warnings.\n\
         Use \"N/A\" for \"criticalIngredient\" if the product appears gluten free.\n\
         The explanation must be a single sentence in {language}.\n\n\
         Ingredients list:\n\"{ingredients_text}\"\n\n\
         Respond with JSON in exactly this shape:\n{example}",
        language = lang.display_name(),
        example = example_json(lang),
    )
}

/// JSON schema requiring exactly the three result keys.
pub fn response_schema(lang: Lang) -> ResponseSchema {
    let verdicts: Vec<&str> = Verdict::ALL.iter().map(|v| v.as_ref()).collect();

    let mut explanation = json!({ "type": "string" });
    if lang == Lang::En {
        explanation["pattern"] = Value::String(ASCII_PATTERN.to_string());
    }

    ResponseSchema {
        name: SCHEMA_NAME.to_string(),
        schema: json!({
            "type": "object",
            "properties": {
                "verdict": { "type": "string", "enum": verdicts },
                "criticalIngredient": { "type": "string" },
                "explanation": explanation,
            },
            "required": ["verdict", "criticalIngredient", "explanation"],
            "additionalProperties": false,
        }),
    }
}

/// Build the schema-constrained analysis request.
pub fn analysis_request(ingredients_text: &str, lang: Lang) -> CompletionRequest {
    CompletionRequest::new(vec![
        ChatMessage::system(system_prompt(lang)),
        ChatMessage::user(user_prompt(ingredients_text, lang)),
    ])
    .with_schema(response_schema(lang))
}

/// Build the corrective request that rewrites `sentence` into `lang`.
pub fn rewrite_request(sentence: &str, lang: Lang) -> CompletionRequest {
    let instruction = match lang {
        Lang::En => {
            "Rewrite the user's sentence as one sentence in plain English. \
             Use ASCII characters only. Reply with the sentence only, without quotes."
        }
        Lang::Ar => {
            "Rewrite the user's sentence as one sentence in Arabic using Arabic script. \
             Reply with the sentence only, without quotes."
        }
    };

    CompletionRequest::new(vec![
        ChatMessage::system(instruction),
        ChatMessage::user(sentence),
    ])
}
