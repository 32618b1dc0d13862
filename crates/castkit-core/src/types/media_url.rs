//! URL values and stream identifiers.

use std::fmt;
use url::Url;

/// A URL that may also hold text which does not parse.
///
/// Descriptors are built from loosely typed input, so a `MediaUrl` keeps
/// whatever string it was given and records whether it parsed as an
/// absolute URL. Equality compares [`spec`](MediaUrl::spec), the canonical
/// form for valid URLs and the raw text otherwise.
///
/// # Example
///
/// ```
/// use castkit_core::MediaUrl;
///
/// let url = MediaUrl::new("HTTP://Example.com");
/// assert!(url.is_valid());
/// assert_eq!(url.spec(), "http://example.com/");
///
/// assert!(!MediaUrl::new("eth0").is_valid());
/// assert!(!MediaUrl::default().is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MediaUrl {
    raw: String,
    parsed: Option<Url>,
}

impl MediaUrl {
    pub fn new(spec: impl Into<String>) -> Self {
        let raw = spec.into();
        let parsed = Url::parse(&raw).ok();
        Self { raw, parsed }
    }

    /// Returns true if the text parsed as an absolute URL.
    pub fn is_valid(&self) -> bool {
        self.parsed.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Canonical string form; the raw text when the URL is not valid.
    pub fn spec(&self) -> &str {
        match &self.parsed {
            Some(url) => url.as_str(),
            None => &self.raw,
        }
    }

    pub fn scheme(&self) -> Option<&str> {
        self.parsed.as_ref().map(Url::scheme)
    }

    pub fn as_url(&self) -> Option<&Url> {
        self.parsed.as_ref()
    }
}

impl PartialEq for MediaUrl {
    fn eq(&self, other: &Self) -> bool {
        self.spec() == other.spec()
    }
}

impl Eq for MediaUrl {}

impl fmt::Display for MediaUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec())
    }
}

impl From<&str> for MediaUrl {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for MediaUrl {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Url> for MediaUrl {
    fn from(url: Url) -> Self {
        Self {
            raw: url.as_str().to_string(),
            parsed: Some(url),
        }
    }
}

/// Numeric identifier of an input or output URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UriId(u64);

impl UriId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for UriId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl TryFrom<i64> for UriId {
    type Error = std::num::TryFromIntError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        u64::try_from(id).map(Self)
    }
}

impl fmt::Display for UriId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
