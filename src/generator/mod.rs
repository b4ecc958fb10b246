//! Article generation against a chat-completion endpoint.

mod prompt;

pub use prompt::{build_article_prompt, ARTICLE_PROMPT_TEMPLATE, JOURNALIST_PERSONA};

use log::{debug, warn};
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::error::GenerateError;
use crate::extract;
use crate::model::Article;

/// Client for the upstream language model.
pub struct ArticleGenerator {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl ArticleGenerator {
    /// Create a generator from the loaded application configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, GenerateError> {
        Ok(ArticleGenerator {
            client: Client::new(),
            api_key: config.require_openai_api_key()?,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    /// Create a generator with explicit credentials.
    pub fn new(api_key: String, model: String) -> Self {
        ArticleGenerator {
            client: Client::new(),
            api_key,
            base_url: "https://api.openai.com".to_string(),
            model,
        }
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        ArticleGenerator {
            client: Client::new(),
            api_key,
            base_url,
            model,
        }
    }

    /// Generate an article about `topic` in `language`.
    ///
    /// Sends one chat-completion request and hands the raw response content
    /// to the extractor, which never fails. Non-2xx statuses and empty
    /// response content are the only failure modes past the transport.
    pub async fn generate(&self, topic: &str, language: &str) -> Result<Article, GenerateError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": JOURNALIST_PERSONA},
                    {"role": "user", "content": build_article_prompt(topic, language)}
                ]
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("model endpoint returned {status}: {body}");
            return Err(GenerateError::ModelHttp {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = response.json().await?;
        debug!("model response payload: {payload:?}");

        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .map(str::trim)
            .unwrap_or("");
        if content.is_empty() {
            return Err(GenerateError::EmptyResponse);
        }

        Ok(extract::extract(content, topic))
    }
}
