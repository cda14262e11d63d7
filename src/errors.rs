#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("{provider} API error: {message}")]
    ProviderApi { provider: String, message: String },
    #[error("Provider error: {0}")]
    Provider(String),
    #[error("session has no agents")]
    EmptySession,
    #[error("duplicate agent name '{0}'")]
    DuplicateAgentName(String),
    #[error("Human input error: {0}")]
    HumanInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
