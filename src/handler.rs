//! Transport-agnostic invocation surface.
//!
//! Accepts an HTTP-like method plus a JSON body and returns a status code
//! with a JSON payload. This is the single place where pipeline errors are
//! translated into the external response contract.

use log::{error, info};
use serde_json::{json, Value};

use crate::error::GenerateError;
use crate::generator::ArticleGenerator;
use crate::request;
use crate::store::DocumentStore;

/// The invocation result: a status code and a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

/// Handle one invocation end to end.
///
/// Non-POST methods are rejected before the pipeline runs. Validation
/// failures answer 400, everything else that goes wrong answers 500 with a
/// generic message; only store and unexpected failures carry a `detail`
/// field, so configuration and upstream internals never reach the caller.
pub async fn handle(
    method: &str,
    body: &Value,
    generator: &ArticleGenerator,
    store: &dyn DocumentStore,
) -> Response {
    if method != "POST" {
        return failure(&GenerateError::MethodNotAllowed);
    }

    let request = match request::validate(body) {
        Ok(request) => request,
        Err(err) => return failure(&err),
    };

    match crate::generate_news(&request, generator, store).await {
        Ok(outcome) => {
            info!(
                "generated article \"{}\" ({}) as document {}",
                outcome.record.title, request.language, outcome.id
            );
            Response {
                status: 201,
                body: json!({
                    "status": "ok",
                    "id": outcome.id,
                    "newsId": outcome.id,
                    "title": outcome.record.title,
                    "language": outcome.record.language,
                    "trendType": outcome.record.trend_type,
                }),
            }
        }
        Err(err) => failure(&err),
    }
}

fn failure(err: &GenerateError) -> Response {
    let status = err.status();
    // Full detail goes to the log; the response stays generic unless the
    // error is safe to echo.
    if status >= 500 {
        error!("pipeline failed: {err}");
    }

    let body = match (status, err.detail_is_public()) {
        (400, _) | (405, _) => json!({"error": err.to_string()}),
        (_, true) => json!({"error": "generation failed", "detail": err.to_string()}),
        (_, false) => json!({"error": "generation failed"}),
    };

    Response { status, body }
}
