use thiserror::Error;

#[derive(Debug, Error)]
pub enum JanSevaError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid configuration: {context} — {reason}")]
    InvalidConfiguration { context: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for JanSevaError {
    fn from(e: serde_json::Error) -> Self {
        JanSevaError::SerializationError(e.to_string())
    }
}
