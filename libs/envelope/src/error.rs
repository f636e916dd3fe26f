#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("data key is not valid base64: {0}")]
    KeyDecode(base64::DecodeError),

    #[error("data key must be {expected} bytes, got {actual}")]
    KeyLength { expected: usize, actual: usize },

    #[error("initialisation vector is not valid base64: {0}")]
    IvDecode(base64::DecodeError),

    #[error("initialisation vector must be {expected} bytes, got {actual}")]
    IvLength { expected: usize, actual: usize },

    #[error("gzip compress: {0}")]
    Compress(std::io::Error),

    #[error("gzip decompress: {0}")]
    Decompress(std::io::Error),
}
