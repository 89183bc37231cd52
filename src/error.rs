use thiserror::Error;

#[derive(Debug, Error)]
pub enum RfcError {
    #[error("Error querying page: {url}\n{status}")]
    Http {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed metadata: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed metadata: {0}")]
    Metadata(String),

    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Could not determine the home directory")]
    NoHome,
}

pub type Result<T> = std::result::Result<T, RfcError>;
