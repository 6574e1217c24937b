use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

impl CipherError {
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidKey(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
