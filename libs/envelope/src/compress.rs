use std::io::Read;

use flate2::Compression;
use flate2::read::{GzDecoder, GzEncoder};

use crate::error::EnvelopeError;

/// gzip-compress a batch body.
pub fn gzip(data: &[u8]) -> Result<Vec<u8>, EnvelopeError> {
    let mut encoder = GzEncoder::new(data, Compression::default());
    let mut compressed = Vec::new();
    encoder
        .read_to_end(&mut compressed)
        .map_err(EnvelopeError::Compress)?;
    Ok(compressed)
}

/// Inverse of [`gzip`], used on the verification path.
pub fn gunzip(data: &[u8]) -> Result<Vec<u8>, EnvelopeError> {
    let mut decoder = GzDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(EnvelopeError::Decompress)?;
    Ok(decompressed)
}
