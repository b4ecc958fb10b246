use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::seo::SeoMetadata;

/// A validated, immutable generation request.
///
/// Built by [`crate::request::validate`] from an arbitrary JSON body and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Non-empty, trimmed topic to write about
    pub topic: String,
    /// Lowercase language code, "en" when the caller did not send one
    pub language: String,
    /// Why this topic was requested ("manual" when unspecified)
    pub trend_type: String,
    /// Caller-supplied trend strength, stored but not interpreted
    pub trend_score: Option<f64>,
    /// Non-empty source labels for the trend signal
    pub trend_source: Vec<String>,
    /// Observation window of the trend signal, in minutes
    pub trend_window_minutes: Option<i64>,
}

/// A structured article extracted from the model response.
///
/// All three fields are non-empty after fallback resolution, except when
/// the model returned no usable text at all; the pipeline refuses to
/// persist that case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub title: String,
    pub summary: String,
    pub body: String,
}

/// The persistence-ready record handed to the document store.
///
/// Union of the request, the extracted article and its SEO metadata, plus
/// static defaults: engagement counters at zero, moderation flags cleared
/// and both audit timestamps set to the generation instant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsRecord {
    pub topic: String,
    pub language: String,
    pub trend_type: String,
    pub trend_score: Option<f64>,
    pub trend_source: Vec<String>,
    pub trend_window_minutes: Option<i64>,

    pub title: String,
    pub summary: String,
    pub body: String,

    pub seo_title: String,
    pub seo_description: String,
    pub slug: String,
    pub keywords: Vec<String>,

    pub views: u64,
    pub likes: u64,
    pub shares: u64,
    pub flagged: bool,
    pub moderation_notes: Option<String>,
    pub status: String,
    pub ai_generated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewsRecord {
    /// Assemble the terminal record from the pipeline's intermediate values.
    pub fn assemble(request: &GenerationRequest, article: Article, seo: SeoMetadata) -> Self {
        let now = Utc::now();
        NewsRecord {
            topic: request.topic.clone(),
            language: request.language.clone(),
            trend_type: request.trend_type.clone(),
            trend_score: request.trend_score,
            trend_source: request.trend_source.clone(),
            trend_window_minutes: request.trend_window_minutes,
            title: article.title,
            summary: article.summary,
            body: article.body,
            seo_title: seo.title,
            seo_description: seo.description,
            slug: seo.slug,
            keywords: seo.keywords,
            views: 0,
            likes: 0,
            shares: 0,
            flagged: false,
            moderation_notes: None,
            status: "published".to_string(),
            ai_generated: true,
            created_at: now,
            updated_at: now,
        }
    }
}
