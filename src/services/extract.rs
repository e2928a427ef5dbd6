//! Resilient JSON object extraction from model output.
//!
//! The completion service does not always honour the requested format: replies
//! may be wrapped in code fences or prose. Extraction tries, in order, a direct
//! parse, the first balanced `{...}` substring that parses as an object, and
//! finally an empty object.

use serde_json::{Map, Value};

/// Upper bound on balanced candidates handed to the JSON parser.
const MAX_CANDIDATES: usize = 32;

/// Extract a JSON object from `raw`, falling back to an empty object.
pub fn extract_object(raw: &str) -> Map<String, Value> {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw.trim()) {
        return map;
    }

    for (start, end) in balanced_spans(raw).into_iter().take(MAX_CANDIDATES) {
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(&raw[start..end]) {
            return map;
        }
    }

    tracing::warn!(len = raw.len(), "No JSON object found in completion, using empty object");
    Map::new()
}

/// Byte ranges of every balanced `{...}` in `text`, ordered by start offset.
///
/// Single pass with a stack of open-brace offsets. Quotes are only tracked
/// inside an open brace, so prose around the object does not affect string
/// state. Unmatched `}` are ignored.
fn balanced_spans(text: &str) -> Vec<(usize, usize)> {
    let mut open: Vec<usize> = Vec::new();
    let mut spans = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' if !open.is_empty() => in_string = true,
            '{' => open.push(i),
            '}' => {
                if let Some(start) = open.pop() {
                    spans.push((start, i + c.len_utf8()));
                }
            }
            _ => {}
        }
    }

    spans.sort_by_key(|&(start, _)| start);
    spans
}
