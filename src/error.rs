use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),
    #[error("Invalid time of day: {0}")]
    InvalidTime(#[from] chrono::ParseError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
