//! Identifier extraction
//!
//! One extractor per platform. Every extractor is best-effort: a link that
//! does not match yields `None`, never an error.

use std::sync::LazyLock;

use regex::Regex;

/// Regex patterns, compiled on first use
mod patterns {
    use super::{LazyLock, Regex};

    /// Greedy prefix, so the last marker in the link wins
    pub static YOUTUBE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r".*(?:youtu.be/|v/|u/(?-u:\w)/|embed/|watch\?v=)([^#&?]*).*")
            .expect("Invalid youtube regex")
    });

    pub static MEDAL: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"medal\.tv/(?:clip|clips|games/[^/]+/clips)/([^/?#]+)")
            .expect("Invalid medal regex")
    });

    /// Tried in order: clips subdomain, channel clip path, bare clip path
    pub static TWITCH: LazyLock<[Regex; 3]> = LazyLock::new(|| {
        [
            r"clips\.twitch\.tv/([^/?#]+)",
            r"twitch\.tv/[^/]+/clip/([^/?#]+)",
            r"twitch\.tv/clip/([^/?#]+)",
        ]
        .map(|p| Regex::new(p).expect("Invalid twitch regex"))
    });

    /// Tried in order: file path, open link, direct download link
    pub static GOOGLE_DRIVE: LazyLock<[Regex; 3]> = LazyLock::new(|| {
        [
            r"drive\.google\.com/file/d/([^&/#]+)",
            r"drive\.google\.com/open\?id=([^&/#]+)",
            r"uc\?id=([^&/#]+)",
        ]
        .map(|p| Regex::new(p).expect("Invalid google drive regex"))
    });

    pub static BARE_ID: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9_-]{6,}$").expect("Invalid bare id regex")
    });
}

/// First capture group of `re` in `haystack`, if non-empty.
fn capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// First non-empty capture among ordered alternatives.
fn capture_first(alternatives: &[Regex], haystack: &str) -> Option<String> {
    alternatives.iter().find_map(|re| capture(re, haystack))
}

/// Extract a YouTube video ID from `youtu.be/`, `/v/`, `/u/x/`, `/embed/`
/// or `watch?v=` links.
#[must_use]
pub fn youtube_id(url: &str) -> Option<String> {
    let id = capture(&patterns::YOUTUBE, url);
    if id.is_none() {
        tracing::debug!(url, "No YouTube id found");
    }
    id
}

/// Extract a Medal.tv clip ID (`/clip/`, `/clips/`, `/games/<game>/clips/`).
#[must_use]
pub fn medal_id(url: &str) -> Option<String> {
    let id = capture(&patterns::MEDAL, url);
    if id.is_none() {
        tracing::debug!(url, "No Medal clip id found");
    }
    id
}

/// Extract a Twitch clip slug.
#[must_use]
pub fn twitch_clip_id(url: &str) -> Option<String> {
    let id = capture_first(patterns::TWITCH.as_slice(), url);
    if id.is_none() {
        tracing::debug!(url, "No Twitch clip slug found");
    }
    id
}

/// Extract a Google Drive file ID.
#[must_use]
pub fn google_drive_id(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }

    let id = capture_first(patterns::GOOGLE_DRIVE.as_slice(), url);
    if id.is_none() {
        tracing::debug!(url, "No Google Drive file id found");
    }
    id
}

/// Whether `s` is already a bare identifier rather than a link:
/// six or more letters, digits, underscores or hyphens and nothing else.
#[must_use]
pub fn looks_like_bare_id(s: &str) -> bool {
    patterns::BARE_ID.is_match(s)
}
