use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to read market data: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed market data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no market data for {0}")]
    NotFound(String),
}
