use thiserror::Error;

/// Errors that can occur while generating and persisting an article
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The request body is missing a usable topic
    #[error("missing or empty topic")]
    MissingTopic,

    /// The invocation used a method other than POST
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Required configuration values are missing
    #[error("configuration error: {0}")]
    Config(String),

    /// Failed to load configuration from file or environment
    #[error("configuration error: {0}")]
    ConfigFile(#[from] config::ConfigError),

    /// The model endpoint answered with a non-success status
    #[error("model endpoint returned status {status}: {body}")]
    ModelHttp { status: u16, body: String },

    /// The model answered but its response carried no content
    #[error("model response contained no content")]
    EmptyResponse,

    /// An HTTP request failed before a response was received
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The document store rejected the assembled record
    #[error("store rejected document: {0}")]
    Store(String),

    /// Anything not covered by a more specific variant
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl GenerateError {
    /// HTTP status code this error maps to on the invocation surface.
    pub fn status(&self) -> u16 {
        match self {
            GenerateError::MissingTopic => 400,
            GenerateError::MethodNotAllowed => 405,
            _ => 500,
        }
    }

    /// Whether the error description is safe to echo back to the caller.
    ///
    /// Configuration and upstream failures are logged in full but surfaced
    /// as a generic message so that secrets and endpoint internals never
    /// leak into a response body.
    pub fn detail_is_public(&self) -> bool {
        matches!(self, GenerateError::Store(_) | GenerateError::Unexpected(_))
    }
}
