use chrono::{DateTime, Utc};
use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// Timestamp
/// (in seconds since the unix epoch)
///

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Construct from seconds.
    #[must_use]
    pub const fn from_seconds(secs: u64) -> Self {
        Self(secs)
    }

    #[allow(clippy::cast_sign_loss)]
    pub fn parse_rfc3339(s: &str) -> Result<Self, String> {
        let dt =
            DateTime::parse_from_rfc3339(s).map_err(|e| format!("timestamp parse error: {e}"))?;
        let ts = dt.timestamp();
        if ts < 0 {
            return Err("timestamp before epoch".to_string());
        }

        Ok(Self(ts as u64))
    }

    pub fn parse_flexible(s: &str) -> Result<Self, String> {
        // Try integer seconds
        if let Ok(n) = s.parse::<u64>() {
            return Ok(Self(n));
        }

        Self::parse_rfc3339(s)
    }

    /// Current wall-clock timestamp in seconds.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn now() -> Self {
        Self(Utc::now().timestamp().max(0) as u64)
    }

    /// Render as RFC 3339, or `None` when the value is outside chrono's range.
    #[must_use]
    pub fn to_rfc3339(self) -> Option<String> {
        let secs = i64::try_from(self.0).ok()?;

        DateTime::<Utc>::from_timestamp(secs, 0).map(|dt| dt.to_rfc3339())
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}
