// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VibeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database Error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Editor exited with a non-zero status")]
    EditorError,

    #[error("Entry {0} not found")]
    EntryNotFound(String),

    #[error("Entry {0} already exists")]
    DuplicateId(String),

    #[error("API key is not set (GEMINI_API_KEY or API_KEY)")]
    MissingApiKey,

    #[error("Analysis API error: {0}")]
    Api(String),

    #[error("Analysis API returned an empty response")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, VibeError>;
