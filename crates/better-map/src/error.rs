use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON conversion error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a flat record (JSON object), found {found}")]
    NotARecord { found: &'static str },
}
