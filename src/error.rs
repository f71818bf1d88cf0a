use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum WarehouseError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, WarehouseError>;
