//! Input descriptor value types.

pub mod input_uri;
pub mod input_url;
pub mod media_url;
pub mod srt_key;
pub mod stream_link;
pub mod user_agent;

pub use input_uri::InputUri;
pub use input_url::InputUrl;
pub use media_url::{MediaUrl, UriId};
pub use srt_key::SrtKey;
pub use stream_link::{Quality, StreamLink};
pub use user_agent::UserAgent;
