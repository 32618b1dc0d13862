//! Input source descriptor.
//!
//! An [`InputUri`] is an [`InputUrl`] plus six optional overrides that tune
//! how the input is pulled. Every override is independently optional and
//! "unset" is kept apart from any default value.
//!
//! Both conversion paths are lenient about the overrides: a missing or
//! malformed override is dropped on its own and never fails the whole
//! conversion. Only the base identity and URL can do that.

use super::input_url::InputUrl;
use super::media_url::{MediaUrl, UriId};
use super::srt_key::SrtKey;
use super::stream_link::StreamLink;
use super::user_agent::UserAgent;
use crate::config::{ConfigMap, FromConfigMap};
use crate::document::{
    JsonObject, JsonSerializable, get_enum_field, get_int_field, get_object_field,
    get_string_field,
};
use crate::error::{CastkitError, Result};
use serde_json::Value;
use tracing::debug;

pub const USER_AGENT_FIELD: &str = "user_agent";
pub const STREAM_LINK_FIELD: &str = "stream_link";
pub const PROXY_FIELD: &str = "proxy";
pub const PROGRAM_NUMBER_FIELD: &str = "program_number";
pub const MULTICAST_IFACE_FIELD: &str = "multicast_iface";
pub const SRT_KEY_FIELD: &str = "srt_key";

/// Input URL with optional pull overrides.
///
/// Validity is that of the base [`InputUrl`]; overrides never affect it.
/// Equality covers the base and all six overrides, presence included.
///
/// # Example
///
/// ```
/// use castkit_core::{InputUri, JsonSerializable, MediaUrl, UriId, UserAgent};
///
/// let mut uri = InputUri::new(UriId::new(1), MediaUrl::new("udp://239.0.0.1:1234"));
/// uri.set_user_agent(Some(UserAgent::Vlc));
/// uri.set_multicast_iface(Some("eth0".to_string()));
///
/// let doc = uri.serialize().unwrap();
/// assert_eq!(doc["user_agent"], 1);
/// assert!(doc.get("program_number").is_none());
///
/// let mut decoded = InputUri::default();
/// decoded.deserialize(&doc).unwrap();
/// assert_eq!(uri, decoded);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputUri {
    base: InputUrl,
    user_agent: Option<UserAgent>,
    stream_link: Option<StreamLink>,
    http_proxy_url: Option<MediaUrl>,
    program_number: Option<i32>,
    multicast_iface: Option<String>,
    srt_key: Option<SrtKey>,
}

impl InputUri {
    /// Creates a descriptor with every override unset.
    pub fn new(id: UriId, url: MediaUrl) -> Self {
        Self::from_base(InputUrl::new(id, url))
    }

    pub fn from_base(base: InputUrl) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.base.is_valid()
    }

    /// Same as `==`.
    pub fn equals(&self, other: &InputUri) -> bool {
        self == other
    }

    pub fn base(&self) -> &InputUrl {
        &self.base
    }

    pub fn id(&self) -> UriId {
        self.base.id()
    }

    pub fn set_id(&mut self, id: UriId) {
        self.base.set_id(id);
    }

    pub fn url(&self) -> &MediaUrl {
        self.base.url()
    }

    pub fn set_url(&mut self, url: MediaUrl) {
        self.base.set_url(url);
    }

    pub fn user_agent(&self) -> Option<UserAgent> {
        self.user_agent
    }

    pub fn set_user_agent(&mut self, agent: Option<UserAgent>) {
        self.user_agent = agent;
    }

    pub fn stream_link(&self) -> Option<&StreamLink> {
        self.stream_link.as_ref()
    }

    pub fn set_stream_link(&mut self, link: Option<StreamLink>) {
        self.stream_link = link;
    }

    pub fn http_proxy_url(&self) -> Option<&MediaUrl> {
        self.http_proxy_url.as_ref()
    }

    pub fn set_http_proxy_url(&mut self, url: Option<MediaUrl>) {
        self.http_proxy_url = url;
    }

    pub fn program_number(&self) -> Option<i32> {
        self.program_number
    }

    pub fn set_program_number(&mut self, pid: Option<i32>) {
        self.program_number = pid;
    }

    pub fn multicast_iface(&self) -> Option<&str> {
        self.multicast_iface.as_deref()
    }

    pub fn set_multicast_iface(&mut self, iface: Option<String>) {
        self.multicast_iface = iface;
    }

    pub fn srt_key(&self) -> Option<&SrtKey> {
        self.srt_key.as_ref()
    }

    pub fn set_srt_key(&mut self, key: Option<SrtKey>) {
        self.srt_key = key;
    }
}

/// Logs an override that was present but could not be used.
fn skip_field(field: &str, err: &CastkitError) {
    if !err.is_field_not_found() {
        debug!(field, error = %err, "ignoring malformed input override");
    }
}

/// Logs a nested hash its own factory rejected.
fn skip_nested_field(field: &str) {
    debug!(field, "ignoring input override rejected by its factory");
}

fn skip_map_field(map: &ConfigMap, field: &str) {
    if let Some(value) = map.find(field) {
        debug!(field, found = value.type_name(), "ignoring malformed input override");
    }
}

impl FromConfigMap for InputUri {
    fn make(map: Option<&ConfigMap>) -> Option<Self> {
        let map = map?;
        let base = InputUrl::make(Some(map))?;
        let mut uri = InputUri::from_base(base);

        match map
            .get_as_integer(USER_AGENT_FIELD)
            .and_then(|raw| UserAgent::try_from(raw).ok())
        {
            Some(agent) => uri.set_user_agent(Some(agent)),
            None => skip_map_field(map, USER_AGENT_FIELD),
        }

        match map.get_as_hash(STREAM_LINK_FIELD) {
            Some(link) => {
                let link = StreamLink::make(Some(&link));
                if link.is_none() {
                    skip_nested_field(STREAM_LINK_FIELD);
                }
                uri.set_stream_link(link);
            },
            None => skip_map_field(map, STREAM_LINK_FIELD),
        }

        match map.get_as_basic_string(PROXY_FIELD) {
            Some(proxy) => uri.set_http_proxy_url(Some(MediaUrl::new(proxy))),
            None => skip_map_field(map, PROXY_FIELD),
        }

        match map
            .get_as_integer(PROGRAM_NUMBER_FIELD)
            .and_then(|raw| i32::try_from(raw).ok())
        {
            Some(pid) => uri.set_program_number(Some(pid)),
            None => skip_map_field(map, PROGRAM_NUMBER_FIELD),
        }

        match map.get_as_basic_string(MULTICAST_IFACE_FIELD) {
            Some(iface) => uri.set_multicast_iface(Some(iface.to_string())),
            None => skip_map_field(map, MULTICAST_IFACE_FIELD),
        }

        match map.get_as_hash(SRT_KEY_FIELD) {
            Some(key) => {
                let key = SrtKey::make(Some(&key));
                if key.is_none() {
                    skip_nested_field(SRT_KEY_FIELD);
                }
                uri.set_srt_key(key);
            },
            None => skip_map_field(map, SRT_KEY_FIELD),
        }

        Some(uri)
    }
}

impl JsonSerializable for InputUri {
    fn serialize_fields(&self, doc: &mut JsonObject) -> Result<()> {
        if !self.is_valid() {
            return Err(CastkitError::invalid_value(
                "InputUri",
                format!("'{}' is not a valid url", self.url()),
            ));
        }

        self.base.serialize_fields(doc)?;

        if let Some(agent) = self.user_agent {
            doc.insert(USER_AGENT_FIELD.to_string(), Value::from(agent.as_i64()));
        }

        if let Some(link) = &self.stream_link {
            match link.serialize() {
                Ok(jlink) => {
                    doc.insert(STREAM_LINK_FIELD.to_string(), jlink);
                },
                Err(e) => debug!(field = STREAM_LINK_FIELD, error = %e, "dropping override"),
            }
        }

        if let Some(pid) = self.program_number {
            doc.insert(PROGRAM_NUMBER_FIELD.to_string(), Value::from(pid));
        }

        if let Some(iface) = &self.multicast_iface {
            doc.insert(MULTICAST_IFACE_FIELD.to_string(), Value::from(iface.as_str()));
        }

        if let Some(key) = &self.srt_key {
            match key.serialize() {
                Ok(jkey) => {
                    doc.insert(SRT_KEY_FIELD.to_string(), jkey);
                },
                Err(e) => debug!(field = SRT_KEY_FIELD, error = %e, "dropping override"),
            }
        }

        if let Some(proxy) = &self.http_proxy_url {
            doc.insert(PROXY_FIELD.to_string(), Value::from(proxy.spec()));
        }

        Ok(())
    }

    fn deserialize_fields(&mut self, doc: &JsonObject) -> Result<()> {
        let mut res = InputUri::default();
        res.base.deserialize_fields(doc)?;

        match get_enum_field::<UserAgent>(doc, USER_AGENT_FIELD) {
            Ok(agent) => res.set_user_agent(Some(agent)),
            Err(e) => skip_field(USER_AGENT_FIELD, &e),
        }

        let link = get_object_field(doc, STREAM_LINK_FIELD).and_then(|jlink| {
            let mut link = StreamLink::default();
            link.deserialize(jlink).map(|()| link)
        });
        match link {
            Ok(link) => res.set_stream_link(Some(link)),
            Err(e) => skip_field(STREAM_LINK_FIELD, &e),
        }

        let pid = get_int_field(doc, PROGRAM_NUMBER_FIELD).and_then(|raw| {
            i32::try_from(raw).map_err(|_| {
                CastkitError::validation_error(PROGRAM_NUMBER_FIELD, "out of range")
            })
        });
        match pid {
            Ok(pid) => res.set_program_number(Some(pid)),
            Err(e) => skip_field(PROGRAM_NUMBER_FIELD, &e),
        }

        match get_string_field(doc, MULTICAST_IFACE_FIELD) {
            Ok(iface) => res.set_multicast_iface(Some(iface.to_string())),
            Err(e) => skip_field(MULTICAST_IFACE_FIELD, &e),
        }

        let key = get_object_field(doc, SRT_KEY_FIELD).and_then(|jkey| {
            let mut key = SrtKey::default();
            key.deserialize(jkey).map(|()| key)
        });
        match key {
            Ok(key) => res.set_srt_key(Some(key)),
            Err(e) => skip_field(SRT_KEY_FIELD, &e),
        }

        match get_string_field(doc, PROXY_FIELD) {
            Ok(proxy) => res.set_http_proxy_url(Some(MediaUrl::new(proxy))),
            Err(e) => skip_field(PROXY_FIELD, &e),
        }

        *self = res;
        Ok(())
    }
}
