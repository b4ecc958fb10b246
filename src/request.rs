//! Validation and normalization of the inbound generation request.
//!
//! The inbound body is an arbitrary JSON mapping sent by callers that often
//! omit fields or send them with the wrong type. Apart from the topic,
//! which is required, every wrong-typed field is treated as absent rather
//! than rejected - callers rely on partial payloads being accepted.

use serde_json::Value;

use crate::error::GenerateError;
use crate::model::GenerationRequest;

const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_TREND_TYPE: &str = "manual";

/// Validate a raw JSON body into an immutable [`GenerationRequest`].
///
/// Fails only when the topic is missing or empty after trimming.
pub fn validate(raw: &Value) -> Result<GenerationRequest, GenerateError> {
    let topic = raw
        .get("topic")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("");
    if topic.is_empty() {
        return Err(GenerateError::MissingTopic);
    }

    let language = text_or_default(raw, "language", DEFAULT_LANGUAGE).to_lowercase();
    let trend_type = text_or_default(raw, "trendType", DEFAULT_TREND_TYPE);

    let trend_score = raw.get("trendScore").and_then(Value::as_f64);
    let trend_window_minutes = raw
        .get("trendWindowMinutes")
        .and_then(Value::as_f64)
        .map(|minutes| minutes as i64);

    let trend_source = raw
        .get("trendSource")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(stringify)
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Ok(GenerationRequest {
        topic: topic.to_string(),
        language,
        trend_type,
        trend_score,
        trend_source,
        trend_window_minutes,
    })
}

/// Read a trimmed text field, substituting `default` when the field is
/// absent, wrong-typed or empty.
fn text_or_default(raw: &Value, key: &str, default: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Stringify a trend-source element. Strings are used as-is, numbers and
/// booleans use their display form, anything else becomes empty (dropped).
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
