use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("{field} must be {expected}.")]
    Validation {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Unknown crop '{crop}'. Try one of: {}", .known.join(", "))]
    UnknownCrop { crop: String, known: Vec<String> },

    #[error("Rules error: {0}")]
    Rules(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
