//! Structured JSON documents.
//!
//! Persistence and wire transfer use JSON objects. Types that take part
//! implement [`JsonSerializable`]: they write their own fields into an
//! object someone else owns, and read them back from one. Composite types
//! delegate to their parts through the same trait without looking inside.
//!
//! The `get_*_field` helpers report a missing key as
//! [`CastkitError::FieldNotFound`] and a present key of the wrong JSON type
//! as [`CastkitError::TypeMismatch`], so callers can tell "absent" from
//! "malformed" when they care to.

use crate::error::{CastkitError, Result};
use serde_json::{Map, Value};

/// The object half of a JSON document.
pub type JsonObject = Map<String, Value>;

/// Encode/decode contract for JSON documents.
///
/// # Example
///
/// ```
/// use castkit_core::{InputUrl, JsonSerializable, MediaUrl, UriId};
///
/// let url = InputUrl::new(UriId::new(3), MediaUrl::new("http://example.com/live.ts"));
/// let doc = url.serialize().unwrap();
///
/// let mut decoded = InputUrl::default();
/// decoded.deserialize(&doc).unwrap();
/// assert_eq!(url, decoded);
/// ```
pub trait JsonSerializable {
    /// Writes this value's fields into `doc`.
    fn serialize_fields(&self, doc: &mut JsonObject) -> Result<()>;

    /// Replaces this value with the one described by `doc`.
    ///
    /// On error `self` must be left as it was.
    fn deserialize_fields(&mut self, doc: &JsonObject) -> Result<()>;

    /// Serializes into a fresh JSON object.
    fn serialize(&self) -> Result<Value> {
        let mut doc = JsonObject::new();
        self.serialize_fields(&mut doc)?;
        Ok(Value::Object(doc))
    }

    /// Deserializes from a JSON value, which must be an object.
    fn deserialize(&mut self, doc: &Value) -> Result<()> {
        let object = doc
            .as_object()
            .ok_or_else(|| CastkitError::type_mismatch("<document>", "object"))?;
        self.deserialize_fields(object)
    }

    /// Serializes to compact JSON text.
    fn serialize_to_string(&self) -> Result<String> {
        let doc = self.serialize()?;
        serde_json::to_string(&doc)
            .map_err(|e| CastkitError::parse_error("json_target", e.to_string()))
    }

    /// Deserializes from JSON text.
    fn deserialize_from_str(&mut self, input: &str) -> Result<()> {
        let doc: Value = serde_json::from_str(input).map_err(|e| {
            CastkitError::parse_error_with_cause("json_source", "invalid JSON document", e)
        })?;
        self.deserialize(&doc)
    }
}

fn find<'a>(doc: &'a JsonObject, field: &str) -> Result<&'a Value> {
    doc.get(field)
        .ok_or_else(|| CastkitError::field_not_found(field))
}

/// Reads an integer field.
pub fn get_int_field(doc: &JsonObject, field: &str) -> Result<i64> {
    find(doc, field)?
        .as_i64()
        .ok_or_else(|| CastkitError::type_mismatch(field, "integer"))
}

/// Reads a non-negative integer field, covering the whole `u64` range.
pub fn get_uint_field(doc: &JsonObject, field: &str) -> Result<u64> {
    find(doc, field)?
        .as_u64()
        .ok_or_else(|| CastkitError::type_mismatch(field, "unsigned integer"))
}

/// Reads a string field.
pub fn get_string_field<'a>(doc: &'a JsonObject, field: &str) -> Result<&'a str> {
    find(doc, field)?
        .as_str()
        .ok_or_else(|| CastkitError::type_mismatch(field, "string"))
}

/// Reads a nested object field. The returned value is always an object.
pub fn get_object_field<'a>(doc: &'a JsonObject, field: &str) -> Result<&'a Value> {
    let value = find(doc, field)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(CastkitError::type_mismatch(field, "object"))
    }
}

/// Reads an enumeration stored as its integer discriminant.
pub fn get_enum_field<T>(doc: &JsonObject, field: &str) -> Result<T>
where
    T: TryFrom<i64>,
{
    let raw = get_int_field(doc, field)?;
    T::try_from(raw).map_err(|_| {
        CastkitError::validation_error(field, format!("{raw} is not a known discriminant"))
    })
}
