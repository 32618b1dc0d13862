use crate::error::CastkitError;
use std::fmt;

/// Client identity presented when pulling an input.
///
/// Stored in maps and documents as its integer discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAgent {
    GStreamer = 0,
    Vlc = 1,
    Ffmpeg = 2,
    Wink = 3,
    Chrome = 4,
    Mozilla = 5,
    Safari = 6,
}

impl UserAgent {
    pub const ALL: [UserAgent; 7] = [
        UserAgent::GStreamer,
        UserAgent::Vlc,
        UserAgent::Ffmpeg,
        UserAgent::Wink,
        UserAgent::Chrome,
        UserAgent::Mozilla,
        UserAgent::Safari,
    ];

    /// The integer written to maps and documents.
    pub const fn as_i64(self) -> i64 {
        self as i64
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            UserAgent::GStreamer => "gstreamer",
            UserAgent::Vlc => "vlc",
            UserAgent::Ffmpeg => "ffmpeg",
            UserAgent::Wink => "wink",
            UserAgent::Chrome => "chrome",
            UserAgent::Mozilla => "mozilla",
            UserAgent::Safari => "safari",
        }
    }
}

impl TryFrom<i64> for UserAgent {
    type Error = CastkitError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        UserAgent::ALL
            .into_iter()
            .find(|agent| agent.as_i64() == value)
            .ok_or_else(|| {
                CastkitError::validation_error("user_agent", format!("unknown user agent {value}"))
            })
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
