//! Platform detection
//!
//! Classifies a link into one of the supported hosting services by cheap
//! substring/pattern tests, checked in a fixed order.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::extract;

/// Matches `youtu.be`, `youtube.com` and friends.
static YOUTUBE_HOST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtu\.?be").expect("Invalid youtube host regex"));

/// Video hosting service a link belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Medal,
    Twitch,
    #[serde(rename = "googledrive")]
    GoogleDrive,
    Unknown,
}

impl Platform {
    /// Supported platforms, in detection order.
    pub const ALL: [Self; 4] = [Self::Youtube, Self::Medal, Self::Twitch, Self::GoogleDrive];

    /// Detect the platform of `url`.
    ///
    /// Returns `Unknown` for empty input or when no pattern matches.
    #[must_use]
    pub fn detect(url: &str) -> Self {
        if url.is_empty() {
            return Self::Unknown;
        }

        let platform = Self::ALL
            .into_iter()
            .find(|p| p.matches(url))
            .unwrap_or(Self::Unknown);

        tracing::debug!(url, platform = %platform, "Detected video platform");
        platform
    }

    fn matches(self, url: &str) -> bool {
        match self {
            Self::Youtube => YOUTUBE_HOST.is_match(url),
            Self::Medal => url.contains("medal.tv"),
            Self::Twitch => url.contains("twitch.tv") || url.contains("clips.twitch.tv"),
            Self::GoogleDrive => url.contains("drive.google.com"),
            Self::Unknown => false,
        }
    }

    /// Extract this platform's identifier from `url`.
    #[must_use]
    pub fn extract_id(self, url: &str) -> Option<String> {
        match self {
            Self::Youtube => extract::youtube_id(url),
            Self::Medal => extract::medal_id(url),
            Self::Twitch => extract::twitch_clip_id(url),
            Self::GoogleDrive => extract::google_drive_id(url),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Medal => "medal",
            Self::Twitch => "twitch",
            Self::GoogleDrive => "googledrive",
            Self::Unknown => "unknown",
        }
    }
}

/// Detect the platform of an optional link; absent input is `Unknown`.
#[must_use]
pub fn detect_platform(url: Option<&str>) -> Platform {
    url.map_or(Platform::Unknown, Platform::detect)
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "youtube" => Ok(Self::Youtube),
            "medal" => Ok(Self::Medal),
            "twitch" => Ok(Self::Twitch),
            "googledrive" => Ok(Self::GoogleDrive),
            "unknown" => Ok(Self::Unknown),
            _ => Err(Error::UnknownPlatform(s.to_string())),
        }
    }
}
