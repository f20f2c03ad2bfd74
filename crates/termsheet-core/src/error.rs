use thiserror::Error;

#[derive(Debug, Error)]
pub enum TermSheetError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Narrative generation failed: {0}")]
    Narrative(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for TermSheetError {
    fn from(e: serde_json::Error) -> Self {
        TermSheetError::SerializationError(e.to_string())
    }
}
