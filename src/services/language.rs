use crate::models::analysis::Lang;

/// Returns true if `c` lies in the Arabic block (U+0600..=U+06FF).
pub fn is_arabic_char(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(is_arabic_char)
}

/// Whether `text` satisfies the script constraint of `lang`.
///
/// English text must be ASCII-only; Arabic text must contain at least one
/// Arabic-script code point. Empty text never conforms.
pub fn conforms(text: &str, lang: Lang) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    match lang {
        Lang::En => text.is_ascii(),
        Lang::Ar => contains_arabic(text),
    }
}

fn header_prefers_arabic(accept_language: Option<&str>) -> bool {
    accept_language
        .map(|h| h.trim_start().to_lowercase().starts_with("ar"))
        .unwrap_or(false)
}

/// Resolve the response language.
///
/// Order: an explicit `ar`/`en` hint wins; `auto` looks at the ingredients
/// script and then the `Accept-Language` header; anything else consults the
/// header only. Everything ambiguous resolves to English.
pub fn resolve(
    requested: Option<&str>,
    ingredients_text: &str,
    accept_language: Option<&str>,
) -> Lang {
    let requested = requested.map(str::to_lowercase);

    match requested.as_deref() {
        Some("ar") => Lang::Ar,
        Some("en") => Lang::En,
        Some("auto") if contains_arabic(ingredients_text) => Lang::Ar,
        _ if header_prefers_arabic(accept_language) => Lang::Ar,
        _ => Lang::En,
    }
}
