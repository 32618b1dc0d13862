use castkit_core::{InputUri, JsonObject, JsonSerializable, MediaUrl, UriId, UserAgent};
use serde_json::json;

mod common;

#[test]
fn test_full_roundtrip() {
    let original = common::full_uri();

    let doc = original.serialize().unwrap();
    let mut decoded = InputUri::default();
    decoded.deserialize(&doc).unwrap();

    assert_eq!(original, decoded);
}

#[test]
fn test_partial_roundtrip() {
    let mut original = common::bare_uri();
    original.set_user_agent(Some(UserAgent::GStreamer));
    original.set_multicast_iface(Some("eth0".to_string()));

    let doc = original.serialize().unwrap();
    let object = doc.as_object().unwrap();
    assert_eq!(object.len(), 4, "id, uri and two overrides: {doc}");

    let mut decoded = InputUri::default();
    decoded.deserialize(&doc).unwrap();

    assert_eq!(decoded.user_agent(), Some(UserAgent::GStreamer));
    assert_eq!(decoded.multicast_iface(), Some("eth0"));
    assert!(decoded.stream_link().is_none());
    assert!(decoded.http_proxy_url().is_none());
    assert!(decoded.program_number().is_none());
    assert!(decoded.srt_key().is_none());
}

#[test]
fn test_document_layout() {
    let doc = common::full_uri().serialize().unwrap();

    assert_eq!(
        doc,
        json!({
            "id": 42,
            "uri": "udp://239.10.0.1:5000",
            "user_agent": 2,
            "stream_link": {"prefer": 3, "http_proxy": "http://proxy.local:3128/"},
            "program_number": 1010,
            "multicast_iface": "eth1",
            "srt_key": {"passphrase": "correct-horse-battery", "key_len": 32},
            "proxy": "http://proxy.local:8080/"
        })
    );
}

#[test]
fn test_string_roundtrip() {
    let original = common::full_uri();

    let text = original.serialize_to_string().unwrap();
    let mut decoded = InputUri::default();
    decoded.deserialize_from_str(&text).unwrap();

    assert_eq!(original, decoded);
}

#[test]
fn test_deserialize_missing_base_leaves_instance_unchanged() {
    let mut uri = common::full_uri();
    let before = uri.clone();

    let err = uri
        .deserialize(&json!({"user_agent": 1, "program_number": 7}))
        .unwrap_err();

    assert!(err.is_field_not_found());
    assert_eq!(uri, before);

    assert!(uri.deserialize(&json!([1, 2, 3])).is_err());
    assert!(uri.deserialize_from_str("{ not json").unwrap_err().is_parse_error());
    assert_eq!(uri, before);
}

#[test]
fn test_deserialize_ignores_mistyped_overrides() {
    let mut uri = InputUri::default();

    uri.deserialize(&json!({
        "id": 42,
        "uri": "udp://239.10.0.1:5000",
        "user_agent": 77,
        "stream_link": {"prefer": "best"},
        "proxy": 8080,
        "program_number": "1010",
        "multicast_iface": 0,
        "srt_key": {"passphrase": "only-passphrase"}
    }))
    .unwrap();

    assert_eq!(uri, common::bare_uri());
}

#[test]
fn test_deserialize_replaces_previous_overrides() {
    let mut uri = common::full_uri();

    uri.deserialize(&json!({"id": 1, "uri": "http://example.com/a.ts", "program_number": 2}))
        .unwrap();

    assert_eq!(uri.id(), UriId::new(1));
    assert_eq!(uri.program_number(), Some(2));
    assert!(uri.user_agent().is_none());
    assert!(uri.srt_key().is_none());
}

#[test]
fn test_serialize_invalid_writes_nothing() {
    let mut uri = InputUri::new(UriId::new(1), MediaUrl::new(""));
    uri.set_program_number(Some(3));
    uri.set_user_agent(Some(UserAgent::Vlc));

    let mut doc = JsonObject::new();
    let err = uri.serialize_fields(&mut doc).unwrap_err();

    assert!(err.is_invalid_value());
    assert!(doc.is_empty());
    assert!(InputUri::default().serialize().is_err());
}

#[test]
fn test_serialize_into_existing_document() {
    let mut doc = JsonObject::new();
    doc.insert("type".to_string(), json!("input"));

    common::bare_uri().serialize_fields(&mut doc).unwrap();

    assert_eq!(doc["type"], "input");
    assert_eq!(doc["id"], 42);
    assert!(!doc.contains_key("proxy"));
}

#[test]
fn test_roundtrip_with_largest_id() {
    let original = InputUri::new(UriId::new(u64::MAX), MediaUrl::new("udp://239.0.0.1:1234"));

    let doc = original.serialize().unwrap();
    let mut decoded = InputUri::default();
    decoded.deserialize(&doc).unwrap();

    assert_eq!(original, decoded);
    assert_eq!(decoded.id().get(), u64::MAX);
}

#[test]
fn test_negative_id_is_rejected() {
    let mut uri = common::bare_uri();
    let before = uri.clone();

    let err = uri
        .deserialize(&json!({"id": -1, "uri": "udp://239.0.0.1:1234"}))
        .unwrap_err();

    assert!(err.is_type_mismatch());
    assert_eq!(uri, before);
}
