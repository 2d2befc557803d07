//! Reply extraction from upstream chat completion responses
//!
//! Groq-compatible backends have been observed to place the reply in a few
//! different spots. Extraction is an ordered chain of candidate shapes; the
//! first non-empty hit wins and an exhausted chain yields a fixed
//! placeholder rather than an error.

use serde_json::Value;

/// Returned when every known response shape comes up empty
pub const FALLBACK_REPLY: &str = "I couldn't generate a reply.";

type Extractor = fn(&Value) -> Option<String>;

/// Candidate shapes, tried in order
const EXTRACTORS: &[Extractor] = &[nested_message_content, raw_message, top_level_content];

/// Extract a reply string from a raw completion response
pub fn extract_reply(response: &Value) -> String {
    EXTRACTORS
        .iter()
        .find_map(|extract| extract(response))
        .unwrap_or_else(|| FALLBACK_REPLY.to_string())
}

fn first_choice(response: &Value) -> Option<&Value> {
    response.get("choices")?.get(0)
}

/// `choices[0].message.content` as a non-empty string
fn nested_message_content(response: &Value) -> Option<String> {
    non_empty(first_choice(response)?.get("message")?.get("content")?)
}

/// `choices[0].message` as a non-empty string, or a raw message object
/// without extractable content, rendered as its JSON text
fn raw_message(response: &Value) -> Option<String> {
    let message = first_choice(response)?.get("message")?;

    match message {
        Value::String(_) => non_empty(message),
        Value::Object(_) => Some(message.to_string()),
        _ => None,
    }
}

/// `choices[0].content` as a non-empty string
fn top_level_content(response: &Value) -> Option<String> {
    non_empty(first_choice(response)?.get("content")?)
}

fn non_empty(value: &Value) -> Option<String> {
    value.as_str().filter(|s| !s.is_empty()).map(str::to_string)
}
