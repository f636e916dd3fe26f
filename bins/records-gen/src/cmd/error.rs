use envelope::EnvelopeError;

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("'{topic}' does not match '{pattern}'")]
    Topic { topic: String, pattern: String },

    #[error("cannot write {path}: {source}")]
    Write { path: String, source: std::io::Error },

    #[error("{0}")]
    Envelope(#[from] EnvelopeError),

    #[error("record serialization: {0}")]
    Serialize(#[from] serde_json::Error),
}
