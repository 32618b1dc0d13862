use crate::config::value::ConfigValue;
use crate::error::{CastkitError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An untyped key/value hash used for legacy configuration ingestion.
///
/// Values are looked up with the `get_as_*` accessors, which mirror the
/// legacy container's contract: they report success or failure through
/// `Option` and never error out. A missing key and a key of the wrong type
/// look the same to the caller.
///
/// Iteration order is insertion order (`IndexMap`), so printing a map back
/// to text is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfigMap {
    #[serde(flatten)]
    inner: IndexMap<String, ConfigValue>,
}

impl ConfigMap {
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    pub fn from_inner(inner: IndexMap<String, ConfigValue>) -> Self {
        Self { inner }
    }

    pub fn as_inner(&self) -> &IndexMap<String, ConfigValue> {
        &self.inner
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Inserts a key-value pair, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.inner.insert(key.into(), value.into());
    }

    /// Inserts a nested hash under `key`.
    pub fn insert_hash(&mut self, key: impl Into<String>, value: ConfigMap) {
        self.inner
            .insert(key.into(), ConfigValue::Object(value.inner));
    }

    /// Returns the raw value stored under `key`.
    pub fn find(&self, key: &str) -> Option<&ConfigValue> {
        self.inner.get(key)
    }

    /// Returns the integer stored under `key`.
    pub fn get_as_integer(&self, key: &str) -> Option<i64> {
        self.find(key).and_then(ConfigValue::as_i64)
    }

    /// Returns the string stored under `key`.
    pub fn get_as_basic_string(&self, key: &str) -> Option<&str> {
        self.find(key).and_then(ConfigValue::as_str)
    }

    /// Returns the nested hash stored under `key` as its own map.
    pub fn get_as_hash(&self, key: &str) -> Option<ConfigMap> {
        self.find(key)
            .and_then(ConfigValue::as_object)
            .map(|inner| ConfigMap::from_inner(inner.clone()))
    }

    /// Retrieves a value by key, supporting dot notation for nested access.
    ///
    /// # Example
    /// ```
    /// # use castkit_core::ConfigMap;
    /// let map = ConfigMap::from_json(r#"{"srt_key": {"key_len": 16}}"#).unwrap();
    /// assert_eq!(map.get("srt_key.key_len").and_then(|v| v.as_i64()), Some(16));
    /// ```
    pub fn get(&self, path: &str) -> Option<&ConfigValue> {
        if path.is_empty() {
            return None;
        }

        let mut parts = path.split('.');
        let mut current_value = self.inner.get(parts.next()?)?;

        for part in parts {
            match current_value {
                ConfigValue::Object(map) => {
                    current_value = map.get(part)?;
                },
                _ => return None,
            }
        }

        Some(current_value)
    }

    /// Parses a JSON string into a ConfigMap.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| CastkitError::parse_error_with_cause("json_source", "invalid JSON map", e))
    }

    /// Serializes the map to a JSON string (pretty printed).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CastkitError::parse_error("json_target", e.to_string()))
    }

    /// Parses a YAML string into a ConfigMap.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| CastkitError::parse_error_with_cause("yaml_source", "invalid YAML map", e))
    }

    /// Serializes the map to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| CastkitError::parse_error("yaml_target", e.to_string()))
    }
}

impl From<IndexMap<String, ConfigValue>> for ConfigMap {
    fn from(map: IndexMap<String, ConfigValue>) -> Self {
        ConfigMap { inner: map }
    }
}

/// Builds a value from an untyped legacy map.
///
/// `None` stands for both a null map and a map the type cannot be built
/// from; implementors never report why.
pub trait FromConfigMap: Sized {
    fn make(map: Option<&ConfigMap>) -> Option<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_accessors() {
        let config = ConfigMap::from_json(
            r#"{"id": 7, "uri": "udp://239.0.0.1:1234", "stream_link": {"prefer": 2}}"#,
        )
        .unwrap();

        assert_eq!(config.get_as_integer("id"), Some(7));
        assert_eq!(config.get_as_basic_string("uri"), Some("udp://239.0.0.1:1234"));
        let link = config.get_as_hash("stream_link").unwrap();
        assert_eq!(link.get_as_integer("prefer"), Some(2));

        // Wrong type reads the same as missing
        assert_eq!(config.get_as_integer("uri"), None);
        assert_eq!(config.get_as_basic_string("id"), None);
        assert!(config.get_as_hash("id").is_none());
        assert!(config.get_as_hash("missing").is_none());
    }

    #[test]
    fn test_nested_access() {
        let config = ConfigMap::from_json(r#"{"a": {"b": {"c": true}, "n": 1}}"#).unwrap();

        assert_eq!(config.get("a.b.c").unwrap().as_bool(), Some(true));
        assert_eq!(config.get("a.n.x"), None);
        assert_eq!(config.get(""), None);
    }

    #[test]
    fn test_insert_hash() {
        let mut key = ConfigMap::new();
        key.insert("passphrase", "secret");

        let mut map = ConfigMap::new();
        map.insert_hash("srt_key", key.clone());

        assert_eq!(map.get_as_hash("srt_key"), Some(key));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut map = ConfigMap::new();
        map.insert("multicast_iface", "eth1");
        map.insert("program_number", 100);

        let yaml = map.to_yaml().unwrap();
        let from_yaml = ConfigMap::from_yaml(&yaml).unwrap();

        assert_eq!(map, from_yaml);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = ConfigMap::from_json("not json").unwrap_err();
        assert!(err.is_parse_error());
    }
}
