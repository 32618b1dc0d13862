//! Castkit Core - input source descriptors
//!
//! This crate provides the value types describing where a media input is
//! pulled from ([`InputUri`] and its parts), plus the two representations
//! they convert to and from:
//!
//! - untyped legacy maps ([`ConfigMap`], via [`FromConfigMap::make`]);
//! - JSON documents (via [`JsonSerializable`]).

pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod types;

pub use config::{ConfigMap, ConfigValue, FromConfigMap};
pub use document::{JsonObject, JsonSerializable};
pub use error::{CastkitError, Result};
pub use format::ConfigFormat;
pub use types::{InputUri, InputUrl, MediaUrl, Quality, SrtKey, StreamLink, UriId, UserAgent};
