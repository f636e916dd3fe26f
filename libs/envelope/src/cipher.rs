use aes::Aes128;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use ctr::cipher::{KeyIvInit, StreamCipher};
use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::EnvelopeError;

// The whole 16-byte IV is the initial 128-bit big-endian counter block.
type Aes128Ctr = ctr::Ctr128BE<Aes128>;

pub const KEY_LEN: usize = 16;
pub const IV_LEN: usize = 16;

// ═══════════════════════════════════════════════════════════════
//  Fixed key material
// ═══════════════════════════════════════════════════════════════

/// Data key used for every payload, base64. Deliberately disclosed in
/// source: the fixtures must stay decryptable without any key service.
pub const PLAINTEXT_DATA_KEY: &str = "UBkbtizlrjYs5kZch3CwCg==";

/// Constant "wrapped data key" blob recorded in every sidecar. It is not
/// derived from [`PLAINTEXT_DATA_KEY`] or from any IV; downstream
/// consumers match these bytes literally, so keep them as-is.
pub const ENCRYPTED_DATA_KEY: &str = "kjiRV5fIgKMBI39KYCypACP4YCvk66LdOaMZ8P8jBNbu+i8I1Ji+nVlNR42TVjje5MISs5wX44n1vcE23YxuAuwme7uVJZ8rSKe0TIVDjuc/N8jZ/0eBsRZyndX8z7nHIOCuD2wkIndnIjIDJj4ve4AJpGu/CIufO+QnWiP+6/YyL9t2sCbdsyUQBL/4ub9NsuZMmmBJ4JAl6Fz/xpCXDB1fFaBKOB787YqeE5qbvwx+gnRgcXaRbvH7mxgnLhHEs9Ok/0tIiHoR91s7w5sDz5Neh4jvHsgkuO7EdSFS1l3LqW/2mjIIRsZDUjUauhidaSaM3MS8/xkI+wLAL0qGsA==";

/// Identifier of the notional key-encryption key.
pub const KEY_ENCRYPTION_KEY_ID: &str = "cloudhsm:262187,262209";

// ═══════════════════════════════════════════════════════════════
//  AES-128-CTR
// ═══════════════════════════════════════════════════════════════

pub struct EncryptionResult {
    /// Base64 of the random 16-byte IV used for this payload.
    pub initialisation_vector: String,
    pub encrypted: Vec<u8>,
}

/// Encrypt `payload` under AES-128-CTR with a fresh random IV.
///
/// Confidentiality only: there is no authentication tag, so the output is
/// not tamper-evident.
pub fn encrypt(key_b64: &str, payload: &[u8]) -> Result<EncryptionResult, EnvelopeError> {
    let key = decode_key(key_b64)?;

    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);

    let mut buf = payload.to_vec();
    apply_ctr(&key, &iv, &mut buf);

    Ok(EncryptionResult {
        initialisation_vector: BASE64.encode(iv),
        encrypted: buf,
    })
}

/// Decrypt a payload with the IV recorded in its sidecar. CTR is symmetric,
/// so this is the same keystream application as [`encrypt`].
pub fn decrypt(key_b64: &str, iv_b64: &str, payload: &[u8]) -> Result<Vec<u8>, EnvelopeError> {
    let key = decode_key(key_b64)?;
    let iv = decode_iv(iv_b64)?;

    let mut buf = payload.to_vec();
    apply_ctr(&key, &iv, &mut buf);
    Ok(buf)
}

fn apply_ctr(key: &[u8; KEY_LEN], iv: &[u8; IV_LEN], buf: &mut [u8]) {
    let mut cipher = Aes128Ctr::new(key.into(), iv.into());
    cipher.apply_keystream(buf);
}

fn decode_key(key_b64: &str) -> Result<[u8; KEY_LEN], EnvelopeError> {
    let bytes = BASE64.decode(key_b64).map_err(EnvelopeError::KeyDecode)?;
    bytes.try_into().map_err(|bytes: Vec<u8>| EnvelopeError::KeyLength {
        expected: KEY_LEN,
        actual: bytes.len(),
    })
}

fn decode_iv(iv_b64: &str) -> Result<[u8; IV_LEN], EnvelopeError> {
    let bytes = BASE64.decode(iv_b64).map_err(EnvelopeError::IvDecode)?;
    bytes.try_into().map_err(|bytes: Vec<u8>| EnvelopeError::IvLength {
        expected: IV_LEN,
        actual: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // NIST SP 800-38A F.5.1, CTR-AES128.Encrypt, first block.
    const NIST_KEY_B64: &str = "K34VFiiu0qar9xWICc9PPA==";
    const NIST_IV_B64: &str = "8PHy8/T19vf4+fr7/P3+/w==";
    const NIST_PLAINTEXT_HEX: &str = "6bc1bee22e409f96e93d7e117393172a";
    const NIST_CIPHERTEXT_HEX: &str = "874d6191b620e3261bef6864990db6ce";

    #[test]
    fn ctr_matches_published_reference_vector() {
        let plaintext = hex::decode(NIST_PLAINTEXT_HEX).unwrap();
        let encrypted = decrypt(NIST_KEY_B64, NIST_IV_B64, &plaintext).unwrap();
        assert_eq!(hex::encode(encrypted), NIST_CIPHERTEXT_HEX);
    }

    #[test]
    fn encrypt_then_decrypt_round_trips() {
        let payload = b"newline\njoined\nbatch";
        let result = encrypt(PLAINTEXT_DATA_KEY, payload).unwrap();
        assert_ne!(result.encrypted, payload.to_vec());
        assert_eq!(result.encrypted.len(), payload.len());

        let decrypted =
            decrypt(PLAINTEXT_DATA_KEY, &result.initialisation_vector, &result.encrypted).unwrap();
        assert_eq!(decrypted, payload.to_vec());
    }

    #[test]
    fn every_encryption_draws_a_fresh_iv() {
        let a = encrypt(PLAINTEXT_DATA_KEY, b"payload").unwrap();
        let b = encrypt(PLAINTEXT_DATA_KEY, b"payload").unwrap();
        assert_ne!(a.initialisation_vector, b.initialisation_vector);
        assert_ne!(a.encrypted, b.encrypted);
    }

    #[test]
    fn iv_is_sixteen_bytes_of_base64() {
        let result = encrypt(PLAINTEXT_DATA_KEY, b"x").unwrap();
        let iv = BASE64.decode(result.initialisation_vector).unwrap();
        assert_eq!(iv.len(), IV_LEN);
    }

    #[test]
    fn rejects_bad_key_material() {
        assert!(matches!(
            encrypt("not base64!!", b"x"),
            Err(EnvelopeError::KeyDecode(_))
        ));
        // "c2hvcnQ=" decodes to 5 bytes.
        assert!(matches!(
            encrypt("c2hvcnQ=", b"x"),
            Err(EnvelopeError::KeyLength { expected: 16, actual: 5 })
        ));
    }

    #[test]
    fn rejects_bad_iv() {
        assert!(matches!(
            decrypt(PLAINTEXT_DATA_KEY, "####", b"x"),
            Err(EnvelopeError::IvDecode(_))
        ));
        assert!(matches!(
            decrypt(PLAINTEXT_DATA_KEY, "c2hvcnQ=", b"x"),
            Err(EnvelopeError::IvLength { expected: 16, actual: 5 })
        ));
    }

    #[test]
    fn fixed_key_material_is_well_formed() {
        assert_eq!(BASE64.decode(PLAINTEXT_DATA_KEY).unwrap().len(), KEY_LEN);
        // The wrapped-key blob is opaque but must stay valid base64.
        assert!(BASE64.decode(ENCRYPTED_DATA_KEY).is_ok());
    }
}
