//! Generate an AI-written news article for a topic, derive SEO metadata
//! from the generated text and persist the assembled record.
//!
//! Pipeline: validate the request, prompt the model, extract structured
//! fields from its (possibly malformed) response, derive SEO metadata and
//! hand the record to the document store. Extraction and SEO derivation
//! never fail; every other stage fails fast and is translated into the
//! response contract by [`handler::handle`].

pub mod config;
pub mod error;
pub mod extract;
pub mod generator;
pub mod handler;
pub mod model;
pub mod request;
pub mod seo;
pub mod store;
pub mod text;

use log::debug;

pub use config::AppConfig;
pub use error::GenerateError;
pub use generator::ArticleGenerator;
pub use model::{Article, GenerationRequest, NewsRecord};
pub use seo::SeoMetadata;
pub use store::{DocumentStore, HttpDocumentStore, StoredDocument};

/// The result of a successful pipeline run.
#[derive(Debug, Clone)]
pub struct GeneratedNews {
    /// Identifier assigned by the document store
    pub id: String,
    /// The record as it was persisted
    pub record: NewsRecord,
}

/// Run the pipeline for one validated request: generate, derive, assemble,
/// store. Exactly one model call is made per invocation and awaited before
/// SEO derivation begins.
pub async fn generate_news(
    request: &GenerationRequest,
    generator: &ArticleGenerator,
    store: &dyn DocumentStore,
) -> Result<GeneratedNews, GenerateError> {
    let article = generator.generate(&request.topic, &request.language).await?;

    // A model response that parsed as JSON but carried nothing usable
    // leaves body and summary empty after the fallback chain. Refuse to
    // persist an empty article.
    if article.body.is_empty() {
        return Err(GenerateError::EmptyResponse);
    }

    let seo = seo::derive(&article.title, &article.body);
    debug!("derived slug {} with {} keywords", seo.slug, seo.keywords.len());

    let record = NewsRecord::assemble(request, article, seo);
    let stored = store.store(&record).await?;

    Ok(GeneratedNews {
        id: stored.id,
        record,
    })
}
