//! Base identity of an input: an identifier plus the URL to pull.

use super::media_url::{MediaUrl, UriId};
use crate::config::{ConfigMap, FromConfigMap};
use crate::document::{JsonObject, JsonSerializable, get_string_field, get_uint_field};
use crate::error::{CastkitError, Result};
use serde_json::Value;

pub const ID_FIELD: &str = "id";
pub const URI_FIELD: &str = "uri";

/// Identifier plus URL of an input source.
///
/// Valid iff the URL parses; the identifier may be any value, including 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputUrl {
    id: UriId,
    url: MediaUrl,
}

impl InputUrl {
    pub fn new(id: UriId, url: MediaUrl) -> Self {
        Self { id, url }
    }

    pub fn is_valid(&self) -> bool {
        self.url.is_valid()
    }

    pub fn id(&self) -> UriId {
        self.id
    }

    pub fn set_id(&mut self, id: UriId) {
        self.id = id;
    }

    pub fn url(&self) -> &MediaUrl {
        &self.url
    }

    pub fn set_url(&mut self, url: MediaUrl) {
        self.url = url;
    }
}

impl FromConfigMap for InputUrl {
    fn make(map: Option<&ConfigMap>) -> Option<Self> {
        let map = map?;
        let id = UriId::try_from(map.get_as_integer(ID_FIELD)?).ok()?;
        let url = MediaUrl::new(map.get_as_basic_string(URI_FIELD)?);
        Some(Self::new(id, url))
    }
}

impl JsonSerializable for InputUrl {
    fn serialize_fields(&self, doc: &mut JsonObject) -> Result<()> {
        if !self.is_valid() {
            return Err(CastkitError::invalid_value(
                "InputUrl",
                format!("'{}' is not a valid url", self.url),
            ));
        }

        doc.insert(ID_FIELD.to_string(), Value::from(self.id.get()));
        doc.insert(URI_FIELD.to_string(), Value::from(self.url.spec()));
        Ok(())
    }

    fn deserialize_fields(&mut self, doc: &JsonObject) -> Result<()> {
        let id = UriId::new(get_uint_field(doc, ID_FIELD)?);
        let url = MediaUrl::new(get_string_field(doc, URI_FIELD)?);

        *self = Self::new(id, url);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_invalid() {
        let url = InputUrl::default();

        assert_eq!(url.id(), UriId::new(0));
        assert!(url.url().is_empty());
        assert!(!url.is_valid());
    }

    #[test]
    fn test_make_requires_id_and_uri() {
        let only_uri = ConfigMap::from_json(r#"{"uri": "http://a.b/c"}"#).unwrap();
        assert!(InputUrl::make(Some(&only_uri)).is_none());

        let negative = ConfigMap::from_json(r#"{"id": -4, "uri": "http://a.b/c"}"#).unwrap();
        assert!(InputUrl::make(Some(&negative)).is_none());

        let full = ConfigMap::from_json(r#"{"id": 4, "uri": "http://a.b/c"}"#).unwrap();
        let url = InputUrl::make(Some(&full)).unwrap();
        assert_eq!(url.id(), UriId::new(4));
        assert_eq!(url.url().spec(), "http://a.b/c");
    }

    #[test]
    fn test_serialize_invalid_writes_nothing() {
        let url = InputUrl::new(UriId::new(1), MediaUrl::new("???"));
        let mut doc = JsonObject::new();

        assert!(url.serialize_fields(&mut doc).unwrap_err().is_invalid_value());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_deserialize_error_leaves_value() {
        let mut url = InputUrl::new(UriId::new(9), MediaUrl::new("udp://239.1.1.1:5000"));
        let before = url.clone();

        assert!(url.deserialize(&json!({"id": 1})).is_err());
        assert!(url.deserialize(&json!({"id": -1, "uri": "http://x.y/"})).is_err());
        assert_eq!(url, before);
    }

    #[test]
    fn test_deserialize_reads_full_id_range() {
        let mut url = InputUrl::default();

        url.deserialize(&json!({"id": u64::MAX, "uri": "udp://239.1.1.1:5000"}))
            .unwrap();
        assert_eq!(url.id(), UriId::new(u64::MAX));
    }
}
