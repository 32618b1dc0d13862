//! Untyped key/value maps used for legacy configuration ingestion.

pub mod map;
pub mod value;

pub use map::{ConfigMap, FromConfigMap};
pub use value::ConfigValue;
