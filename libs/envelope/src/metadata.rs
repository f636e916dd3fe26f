use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::cipher::{ENCRYPTED_DATA_KEY, KEY_ENCRYPTION_KEY_ID};

/// Sidecar written next to every encrypted batch. Field order matters to
/// downstream consumers and matches the declaration order here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptionMetadata {
    #[serde(rename = "initialisationVector")]
    pub initialisation_vector: String,
    #[serde(rename = "encryptedEncryptionKey")]
    pub encrypted_encryption_key: String,
    #[serde(rename = "keyEncryptionKeyId")]
    pub key_encryption_key_id: String,
}

impl EncryptionMetadata {
    /// Sidecar for one batch. Only the IV varies; the wrapped-key blob and
    /// KEK id are the fixed constants from [`crate::cipher`].
    pub fn for_iv(initialisation_vector: String) -> Self {
        Self {
            initialisation_vector,
            encrypted_encryption_key: ENCRYPTED_DATA_KEY.to_string(),
            key_encryption_key_id: KEY_ENCRYPTION_KEY_ID.to_string(),
        }
    }

    /// Pretty-printed with 4-space indentation.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8(buf).expect("serde_json emits utf-8"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_appear_in_sidecar_order() {
        let rendered = EncryptionMetadata::for_iv("aXY=".into()).to_pretty_json().unwrap();
        let iv = rendered.find("initialisationVector").unwrap();
        let key = rendered.find("encryptedEncryptionKey").unwrap();
        let kek = rendered.find("keyEncryptionKeyId").unwrap();
        assert!(iv < key && key < kek);
    }

    #[test]
    fn rendered_sidecar_is_four_space_indented_json() {
        let rendered = EncryptionMetadata::for_iv("aXY=".into()).to_pretty_json().unwrap();
        assert!(rendered.contains("\n    \"initialisationVector\": \"aXY=\""));

        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.as_object().unwrap().len(), 3);
        assert_eq!(parsed["keyEncryptionKeyId"], KEY_ENCRYPTION_KEY_ID);
        assert_eq!(parsed["encryptedEncryptionKey"], ENCRYPTED_DATA_KEY);
    }

    #[test]
    fn sidecar_reads_back() {
        let rendered = EncryptionMetadata::for_iv("aXY=".into()).to_pretty_json().unwrap();
        let parsed: EncryptionMetadata = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.initialisation_vector, "aXY=");
    }
}
