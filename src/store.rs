//! Document-store collaborator that receives the assembled record.
//!
//! The pipeline treats the store as a black box behind the
//! [`DocumentStore`] trait: hand it a record, get back the created
//! document's identifier. No retries and no validation of the store's
//! response beyond reading that identifier.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::StoreConfig;
use crate::error::GenerateError;
use crate::model::NewsRecord;

/// The store's answer: the identifier of the created document.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredDocument {
    #[serde(rename = "$id")]
    pub id: String,
}

/// Unified trait for document stores
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist one record, returning the created document.
    async fn store(&self, record: &NewsRecord) -> Result<StoredDocument, GenerateError>;
}

/// Appwrite-style HTTP document store.
pub struct HttpDocumentStore {
    client: Client,
    endpoint: String,
    project_id: String,
    api_key: String,
    database_id: String,
    collection_id: String,
}

impl HttpDocumentStore {
    /// Create a store client from the loaded configuration.
    pub fn from_config(config: &StoreConfig) -> Result<Self, GenerateError> {
        let (endpoint, project_id, api_key, database_id, collection_id) = config.require_all()?;
        Ok(HttpDocumentStore {
            client: Client::new(),
            endpoint,
            project_id,
            api_key,
            database_id,
            collection_id,
        })
    }

    #[doc(hidden)]
    pub fn with_endpoint(
        endpoint: String,
        database_id: String,
        collection_id: String,
    ) -> Self {
        HttpDocumentStore {
            client: Client::new(),
            endpoint,
            project_id: "test-project".to_string(),
            api_key: "test-key".to_string(),
            database_id,
            collection_id,
        }
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn store(&self, record: &NewsRecord) -> Result<StoredDocument, GenerateError> {
        let url = format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, self.database_id, self.collection_id
        );

        let response = self
            .client
            .post(&url)
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", &self.api_key)
            .json(&json!({
                "documentId": "unique()",
                "data": record,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Store(format!("status {status}: {body}")));
        }

        let document: StoredDocument = response
            .json()
            .await
            .map_err(|e| GenerateError::Store(format!("unreadable store response: {e}")))?;
        debug!("stored document {}", document.id);
        Ok(document)
    }
}
