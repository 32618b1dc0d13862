//! Encryption key for SRT transport.

use crate::config::{ConfigMap, FromConfigMap};
use crate::document::{JsonObject, JsonSerializable, get_int_field, get_string_field};
use crate::error::{CastkitError, Result};
use serde_json::Value;
use std::fmt;

pub const PASSPHRASE_FIELD: &str = "passphrase";
pub const KEY_LEN_FIELD: &str = "key_len";

/// Key lengths SRT accepts, in bytes. Zero lets the peer choose.
pub const VALID_KEY_LENGTHS: [i64; 4] = [0, 16, 24, 32];

/// Passphrase plus key length for an SRT input.
///
/// `Debug` output never includes the passphrase.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SrtKey {
    passphrase: String,
    key_len: i64,
}

impl SrtKey {
    pub fn new(passphrase: impl Into<String>, key_len: i64) -> Self {
        Self {
            passphrase: passphrase.into(),
            key_len,
        }
    }

    /// Valid iff the passphrase is set and the key length is one SRT supports.
    pub fn is_valid(&self) -> bool {
        !self.passphrase.is_empty() && VALID_KEY_LENGTHS.contains(&self.key_len)
    }

    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    pub fn set_passphrase(&mut self, passphrase: impl Into<String>) {
        self.passphrase = passphrase.into();
    }

    pub fn key_len(&self) -> i64 {
        self.key_len
    }

    pub fn set_key_len(&mut self, key_len: i64) {
        self.key_len = key_len;
    }
}

impl fmt::Debug for SrtKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SrtKey")
            .field("passphrase", &"<redacted>")
            .field("key_len", &self.key_len)
            .finish()
    }
}

impl FromConfigMap for SrtKey {
    fn make(map: Option<&ConfigMap>) -> Option<Self> {
        let map = map?;
        let passphrase = map.get_as_basic_string(PASSPHRASE_FIELD)?;
        let key_len = map.get_as_integer(KEY_LEN_FIELD).unwrap_or_default();
        Some(Self::new(passphrase, key_len))
    }
}

impl JsonSerializable for SrtKey {
    fn serialize_fields(&self, doc: &mut JsonObject) -> Result<()> {
        if !self.is_valid() {
            return Err(CastkitError::invalid_value(
                "SrtKey",
                "passphrase is empty or key length unsupported",
            ));
        }

        doc.insert(PASSPHRASE_FIELD.to_string(), Value::from(self.passphrase.as_str()));
        doc.insert(KEY_LEN_FIELD.to_string(), Value::from(self.key_len));
        Ok(())
    }

    fn deserialize_fields(&mut self, doc: &JsonObject) -> Result<()> {
        let passphrase = get_string_field(doc, PASSPHRASE_FIELD)?;
        let key_len = get_int_field(doc, KEY_LEN_FIELD)?;
        *self = Self::new(passphrase, key_len);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validity() {
        assert!(SrtKey::new("secretsecret", 16).is_valid());
        assert!(SrtKey::new("secretsecret", 0).is_valid());
        assert!(!SrtKey::new("", 16).is_valid());
        assert!(!SrtKey::new("secretsecret", 20).is_valid());
    }

    #[test]
    fn test_debug_hides_passphrase() {
        let key = SrtKey::new("hunter2hunter2", 32);
        let out = format!("{:?}", key);

        assert!(!out.contains("hunter2"));
        assert!(out.contains("32"));
    }

    #[test]
    fn test_make_requires_passphrase() {
        let map = ConfigMap::from_json(r#"{"key_len": 16}"#).unwrap();
        assert!(SrtKey::make(Some(&map)).is_none());

        let map = ConfigMap::from_json(r#"{"passphrase": "abcdefghij"}"#).unwrap();
        assert_eq!(SrtKey::make(Some(&map)), Some(SrtKey::new("abcdefghij", 0)));
    }

    #[test]
    fn test_serialize_invalid_key_fails() {
        let err = SrtKey::new("", 16).serialize().unwrap_err();
        assert!(err.is_invalid_value());
    }

    #[test]
    fn test_deserialize_requires_both_fields() {
        let mut key = SrtKey::new("original1", 24);

        assert!(key.deserialize(&json!({"passphrase": "x"})).is_err());
        assert_eq!(key, SrtKey::new("original1", 24));

        key.deserialize(&json!({"passphrase": "updated12", "key_len": 32}))
            .unwrap();
        assert_eq!(key, SrtKey::new("updated12", 32));
    }
}
