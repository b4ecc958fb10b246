use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::GenerateError;

/// Process-wide configuration, read once at startup and immutable after.
///
/// Passed explicitly into the generator and the store; nothing in the
/// pipeline reads the environment at call time.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// API key for the chat-completion endpoint (can also be set via the
    /// OPENAI_API_KEY environment variable)
    pub openai_api_key: Option<String>,
    /// Model identifier sent with every generation request
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the chat-completion endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Document-store connection settings
    #[serde(default)]
    pub store: StoreConfig,
}

/// Connection settings for the document-store collaborator.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct StoreConfig {
    /// Store API endpoint, e.g. "https://cloud.appwrite.io/v1"
    pub endpoint: Option<String>,
    /// Project identifier sent with every store request
    pub project_id: Option<String>,
    /// Server API key for the store
    pub api_key: Option<String>,
    /// Database the news collection lives in
    pub database_id: Option<String>,
    /// Collection that receives the assembled records
    pub collection_id: Option<String>,
}

// Default value functions
fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with NEWSGEN__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: NEWSGEN__STORE__DATABASE_ID
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: NEWSGEN__STORE__API_KEY
            .add_source(
                Environment::with_prefix("NEWSGEN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// The model API key, falling back to the OPENAI_API_KEY environment
    /// variable. Missing keys are a configuration error naming the variable.
    pub fn require_openai_api_key(&self) -> Result<String, GenerateError> {
        self.openai_api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| {
                GenerateError::Config(
                    "NEWSGEN__OPENAI_API_KEY (or OPENAI_API_KEY) is not set".to_string(),
                )
            })
    }
}

impl StoreConfig {
    /// All required store values, or a configuration error listing every
    /// missing variable name.
    pub fn require_all(&self) -> Result<(String, String, String, String, String), GenerateError> {
        let mut missing = Vec::new();
        let endpoint = required(&self.endpoint, "NEWSGEN__STORE__ENDPOINT", &mut missing);
        let project_id = required(&self.project_id, "NEWSGEN__STORE__PROJECT_ID", &mut missing);
        let api_key = required(&self.api_key, "NEWSGEN__STORE__API_KEY", &mut missing);
        let database_id = required(&self.database_id, "NEWSGEN__STORE__DATABASE_ID", &mut missing);
        let collection_id = required(
            &self.collection_id,
            "NEWSGEN__STORE__COLLECTION_ID",
            &mut missing,
        );

        if missing.is_empty() {
            Ok((endpoint, project_id, api_key, database_id, collection_id))
        } else {
            Err(GenerateError::Config(format!(
                "missing store configuration: {}",
                missing.join(", ")
            )))
        }
    }
}

fn required(value: &Option<String>, name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(v) => v.clone(),
        None => {
            missing.push(name);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_model(), "gpt-4o-mini");
        assert_eq!(default_base_url(), "https://api.openai.com");
    }

    #[test]
    fn test_store_config_reports_every_missing_variable() {
        let store = StoreConfig {
            endpoint: Some("https://cloud.appwrite.io/v1".to_string()),
            ..StoreConfig::default()
        };
        let err = store.require_all().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("NEWSGEN__STORE__PROJECT_ID"));
        assert!(message.contains("NEWSGEN__STORE__API_KEY"));
        assert!(message.contains("NEWSGEN__STORE__DATABASE_ID"));
        assert!(message.contains("NEWSGEN__STORE__COLLECTION_ID"));
        assert!(!message.contains("NEWSGEN__STORE__ENDPOINT"));
    }

    #[test]
    fn test_store_config_complete() {
        let store = StoreConfig {
            endpoint: Some("e".to_string()),
            project_id: Some("p".to_string()),
            api_key: Some("k".to_string()),
            database_id: Some("d".to_string()),
            collection_id: Some("c".to_string()),
        };
        assert!(store.require_all().is_ok());
    }
}
