use thiserror::Error;

#[derive(Error, Debug)]
pub enum DexError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}

pub type Result<T> = std::result::Result<T, DexError>;
