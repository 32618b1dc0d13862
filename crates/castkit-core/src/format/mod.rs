//! Text front-ends for legacy configuration maps.
//!
//! Legacy input descriptors arrive as JSON or YAML text. Both are parsed into
//! the same untyped [`ConfigMap`], which is what
//! [`FromConfigMap::make`](crate::FromConfigMap::make) consumes.

use crate::config::ConfigMap;
use crate::error::Result;

/// Supported legacy text formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Guesses the format from a file extension (without dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }

    /// Parses `input` as this format.
    pub fn parse(&self, input: &str) -> Result<ConfigMap> {
        match self {
            ConfigFormat::Json => JsonFormat.parse(input),
            ConfigFormat::Yaml => YamlFormat.parse(input),
        }
    }

    /// Prints `config` in this format.
    pub fn serialize(&self, config: &ConfigMap) -> Result<String> {
        match self {
            ConfigFormat::Json => JsonFormat.serialize(config),
            ConfigFormat::Yaml => YamlFormat.serialize(config),
        }
    }
}

/// A trait for parsing configuration from a string.
pub trait FormatParser: Send + Sync {
    fn parse(&self, input: &str) -> Result<ConfigMap>;
}

/// A trait for serializing configuration to a string.
pub trait FormatSerializer: Send + Sync {
    fn serialize(&self, config: &ConfigMap) -> Result<String>;
}

pub struct JsonFormat;

impl FormatParser for JsonFormat {
    fn parse(&self, input: &str) -> Result<ConfigMap> {
        ConfigMap::from_json(input)
    }
}

impl FormatSerializer for JsonFormat {
    fn serialize(&self, config: &ConfigMap) -> Result<String> {
        config.to_json()
    }
}

pub struct YamlFormat;

impl FormatParser for YamlFormat {
    fn parse(&self, input: &str) -> Result<ConfigMap> {
        ConfigMap::from_yaml(input)
    }
}

impl FormatSerializer for YamlFormat {
    fn serialize(&self, config: &ConfigMap) -> Result<String> {
        config.to_yaml()
    }
}
