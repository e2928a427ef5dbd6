//! Canned completion-service replies

pub const WHEAT_EN: &str = r#"{"verdict":"contains_gluten","criticalIngredient":"wheat flour","explanation":"Contains wheat flour."}"#;

pub const WHEAT_AR: &str = r#"{"verdict":"contains_gluten","criticalIngredient":"دقيق القمح","explanation":"يحتوي المنتج على دقيق القمح وهو مصدر للغلوتين."}"#;

/// English key shape, but the explanation came back in Arabic.
pub const WHEAT_WRONG_SCRIPT_FOR_EN: &str = r#"{"verdict":"contains_gluten","criticalIngredient":"wheat flour","explanation":"يحتوي على دقيق القمح."}"#;

/// Arabic request, English explanation.
pub const OATS_WRONG_SCRIPT_FOR_AR: &str = r#"{"verdict":"may_contain_gluten","criticalIngredient":"شوفان","explanation":"Oats are often cross-contaminated with wheat."}"#;

pub const UNKNOWN_VERDICT: &str = r#"{"verdict":"probably_fine","criticalIngredient":"","explanation":"Looks fine to me."}"#;

pub const FENCED_RICE: &str = "Here is the analysis:\n```json\n{\"verdict\":\"appears_gluten_free\",\"criticalIngredient\":\"N/A\",\"explanation\":\"Rice and salt are naturally gluten free.\"}\n```";

pub const NOT_JSON: &str = "I'm sorry, I can't analyze that.";
