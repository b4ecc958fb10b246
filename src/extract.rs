//! Extraction of a structured article from a raw model response.
//!
//! The upstream model is asked for a JSON object with exactly `title`,
//! `summary` and `body`, but it does not always comply. This module never
//! fails: malformed responses fall back to treating the whole text as the
//! article body, and empty fields are filled by an ordered substitution
//! chain.

use log::debug;
use serde_json::Value;

use crate::model::Article;
use crate::text;

/// Summary length when it has to be synthesized from the body.
const SUMMARY_FALLBACK_LEN: usize = 240;

/// Extract an [`Article`] from the raw model response text.
///
/// The fallback chain runs in a fixed order: title from the topic, then
/// body from the summary, then summary from the body. Body-from-summary
/// happens first so that a response carrying only a body still gets its
/// summary derived from it.
pub fn extract(raw: &str, topic: &str) -> Article {
    let (mut title, mut summary, mut body) = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(fields)) => (
            string_field(&fields, "title"),
            string_field(&fields, "summary"),
            string_field(&fields, "body"),
        ),
        _ => {
            debug!("model response is not a JSON object, using raw text as body");
            (
                topic.to_string(),
                text::truncate(raw, SUMMARY_FALLBACK_LEN).to_string(),
                raw.to_string(),
            )
        }
    };

    if title.is_empty() {
        title = topic.to_string();
    }
    if body.is_empty() {
        body = summary.clone();
    }
    if summary.is_empty() {
        summary = text::truncate(&body, SUMMARY_FALLBACK_LEN).to_string();
    }

    Article {
        title,
        summary,
        body,
    }
}

/// Read a field as trimmed text; absent or non-string values become empty.
fn string_field(fields: &serde_json::Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_json_response() {
        let article = extract(r#"{"title":"A","summary":"B","body":"C"}"#, "topic");
        assert_eq!(article.title, "A");
        assert_eq!(article.summary, "B");
        assert_eq!(article.body, "C");
    }

    #[test]
    fn test_json_fields_are_trimmed() {
        let article = extract(r#"{"title":"  A  ","summary":"B","body":" C "}"#, "topic");
        assert_eq!(article.title, "A");
        assert_eq!(article.body, "C");
    }

    #[test]
    fn test_non_json_response_becomes_body() {
        let article = extract("not json at all", "fuel price");
        assert_eq!(article.title, "fuel price");
        assert_eq!(article.body, "not json at all");
        assert_eq!(article.summary, "not json at all");
    }

    #[test]
    fn test_non_json_summary_is_truncated_to_240() {
        let raw = "x".repeat(500);
        let article = extract(&raw, "topic");
        assert_eq!(article.summary.chars().count(), 240);
        assert_eq!(article.body, raw);
    }

    #[test]
    fn test_json_scalar_takes_fallback_branch() {
        let article = extract("42", "topic");
        assert_eq!(article.title, "topic");
        assert_eq!(article.body, "42");
    }

    #[test]
    fn test_wrong_typed_fields_treated_as_absent() {
        let article = extract(r#"{"title":7,"summary":null,"body":"text"}"#, "topic");
        assert_eq!(article.title, "topic");
        assert_eq!(article.body, "text");
        assert_eq!(article.summary, "text");
    }

    #[test]
    fn test_body_only_response_fills_summary_from_body() {
        let article = extract(r#"{"body":"just a body"}"#, "topic");
        assert_eq!(article.title, "topic");
        assert_eq!(article.body, "just a body");
        assert_eq!(article.summary, "just a body");
    }

    #[test]
    fn test_summary_only_response_fills_body_from_summary() {
        let article = extract(r#"{"summary":"only a summary"}"#, "topic");
        assert_eq!(article.body, "only a summary");
        assert_eq!(article.summary, "only a summary");
    }

    #[test]
    fn test_all_empty_json_leaves_body_and_summary_empty() {
        // The extractor never fails; the pipeline decides what to do with
        // a fully empty article.
        let article = extract(r#"{"title":"","summary":"","body":""}"#, "topic");
        assert_eq!(article.title, "topic");
        assert!(article.body.is_empty());
        assert!(article.summary.is_empty());
    }
}
