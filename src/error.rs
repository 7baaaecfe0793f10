use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed trigger envelope: {0}")]
    Decode(String),

    #[error("Artifact transfer failed: {0}")]
    Transfer(String),

    #[error("Email delivery failed: {0}")]
    Notify(String),

    #[error("Delivery record write failed: {0}")]
    Audit(String),
}

pub type Result<T> = std::result::Result<T, RelayError>;
