#![allow(dead_code)]
use castkit_core::{
    ConfigMap, InputUri, MediaUrl, Quality, SrtKey, StreamLink, UriId, UserAgent,
};

/// Helper to create a ConfigMap from a JSON string slice.
/// Panics if the JSON is invalid (intended for tests).
pub fn map_from_json(json: &str) -> ConfigMap {
    ConfigMap::from_json(json).expect("Failed to create test map from JSON")
}

/// A valid descriptor with no overrides.
pub fn bare_uri() -> InputUri {
    InputUri::new(UriId::new(42), MediaUrl::new("udp://239.10.0.1:5000"))
}

/// A valid descriptor with every override set.
pub fn full_uri() -> InputUri {
    let mut uri = bare_uri();
    uri.set_user_agent(Some(UserAgent::Ffmpeg));
    uri.set_stream_link(Some(StreamLink::new(
        Some(MediaUrl::new("http://proxy.local:3128")),
        Quality::Q720,
    )));
    uri.set_http_proxy_url(Some(MediaUrl::new("http://proxy.local:8080")));
    uri.set_program_number(Some(1010));
    uri.set_multicast_iface(Some("eth1".to_string()));
    uri.set_srt_key(Some(SrtKey::new("correct-horse-battery", 32)));
    uri
}
