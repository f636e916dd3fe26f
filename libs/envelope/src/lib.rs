pub mod cipher;
pub mod compress;
pub mod error;
pub mod metadata;

pub use cipher::{EncryptionResult, decrypt, encrypt};
pub use compress::{gunzip, gzip};
pub use error::EnvelopeError;
pub use metadata::EncryptionMetadata;
