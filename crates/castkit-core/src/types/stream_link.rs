//! Alternate stream descriptor.
//!
//! A stream link tells the ingest side to resolve the input through an
//! extractor (for example a web page wrapping an HLS playlist) instead of
//! pulling the URL directly.

use super::media_url::MediaUrl;
use crate::config::{ConfigMap, FromConfigMap};
use crate::document::{JsonObject, JsonSerializable, get_enum_field, get_string_field};
use crate::error::{CastkitError, Result};
use serde_json::Value;

pub const HTTP_PROXY_FIELD: &str = "http_proxy";
pub const PREFER_FIELD: &str = "prefer";

/// Preferred rendition when the extractor offers several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Quality {
    #[default]
    Best = 0,
    Q360 = 1,
    Q480 = 2,
    Q720 = 3,
    Q1080 = 4,
    Audio = 5,
}

impl Quality {
    pub const fn as_i64(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for Quality {
    type Error = CastkitError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Quality::Best),
            1 => Ok(Quality::Q360),
            2 => Ok(Quality::Q480),
            3 => Ok(Quality::Q720),
            4 => Ok(Quality::Q1080),
            5 => Ok(Quality::Audio),
            _ => Err(CastkitError::validation_error(
                PREFER_FIELD,
                format!("unknown quality {value}"),
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamLink {
    http_proxy: Option<MediaUrl>,
    prefer: Quality,
}

impl StreamLink {
    pub fn new(http_proxy: Option<MediaUrl>, prefer: Quality) -> Self {
        Self { http_proxy, prefer }
    }

    pub fn http_proxy(&self) -> Option<&MediaUrl> {
        self.http_proxy.as_ref()
    }

    pub fn set_http_proxy(&mut self, proxy: Option<MediaUrl>) {
        self.http_proxy = proxy;
    }

    pub fn prefer(&self) -> Quality {
        self.prefer
    }

    pub fn set_prefer(&mut self, prefer: Quality) {
        self.prefer = prefer;
    }
}

impl FromConfigMap for StreamLink {
    fn make(map: Option<&ConfigMap>) -> Option<Self> {
        let map = map?;
        let http_proxy = map.get_as_basic_string(HTTP_PROXY_FIELD).map(MediaUrl::new);
        let prefer = map
            .get_as_integer(PREFER_FIELD)
            .and_then(|raw| Quality::try_from(raw).ok())
            .unwrap_or_default();
        Some(Self { http_proxy, prefer })
    }
}

impl JsonSerializable for StreamLink {
    fn serialize_fields(&self, doc: &mut JsonObject) -> Result<()> {
        doc.insert(PREFER_FIELD.to_string(), Value::from(self.prefer.as_i64()));
        if let Some(proxy) = &self.http_proxy {
            doc.insert(HTTP_PROXY_FIELD.to_string(), Value::from(proxy.spec()));
        }
        Ok(())
    }

    fn deserialize_fields(&mut self, doc: &JsonObject) -> Result<()> {
        let prefer = match get_enum_field::<Quality>(doc, PREFER_FIELD) {
            Ok(prefer) => prefer,
            Err(e) if e.is_field_not_found() => Quality::default(),
            Err(e) => return Err(e),
        };
        let http_proxy = match get_string_field(doc, HTTP_PROXY_FIELD) {
            Ok(proxy) => Some(MediaUrl::new(proxy)),
            Err(e) if e.is_field_not_found() => None,
            Err(e) => return Err(e),
        };

        *self = Self { http_proxy, prefer };
        Ok(())
    }
}
