//! Embed and thumbnail URL construction
//!
//! A [`Resolver`] pairs a [`LinkPolicy`] with the injected [`EmbedContext`]
//! and maps `(platform, id)` to URL templates. Both operations dispatch with
//! one exhaustive `match` over [`Platform`], so a new platform cannot be
//! added without deciding its templates.

use serde::{Deserialize, Serialize};

use crate::extract::looks_like_bare_id;
use crate::platform::Platform;

/// Twitch `parent` used when the embedding page's host is not known.
pub const DEFAULT_HOSTNAME: &str = "localhost";

/// How Medal clips are linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedalLinks {
    /// Direct CDN media (`cdn.medal.tv/clip/{id}/720p.mp4`, `thumbnail.jpg`).
    /// Medal refuses iframe embedding, so the embed is a plain media file.
    Direct,
    /// The public clip page for both embed and thumbnail.
    #[default]
    ClipPage,
}

/// Which of the known link behaviours to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkPolicy {
    pub medal: MedalLinks,
    /// Treat inputs that already look like bare ids as YouTube ids when
    /// building thumbnails.
    pub bare_id_fallback: bool,
}

impl Default for LinkPolicy {
    fn default() -> Self {
        Self {
            medal: MedalLinks::ClipPage,
            bare_id_fallback: true,
        }
    }
}

impl LinkPolicy {
    /// Behaviour before Google Drive support: CDN links for Medal and no
    /// bare id guessing.
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            medal: MedalLinks::Direct,
            bare_id_fallback: false,
        }
    }
}

/// Facts about the page the player is embedded into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedContext {
    /// Host of the embedding page, sent to Twitch as `parent`.
    pub hostname: Option<String>,
}

impl EmbedContext {
    #[must_use]
    pub fn with_hostname(hostname: impl Into<String>) -> Self {
        Self {
            hostname: Some(hostname.into()),
        }
    }

    /// Configured hostname, or `localhost`.
    #[must_use]
    pub fn hostname(&self) -> &str {
        self.hostname
            .as_deref()
            .filter(|h| !h.is_empty())
            .unwrap_or(DEFAULT_HOSTNAME)
    }
}

/// Builds embed and thumbnail URLs for video links.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    policy: LinkPolicy,
    context: EmbedContext,
}

impl Resolver {
    #[must_use]
    pub const fn new(policy: LinkPolicy, context: EmbedContext) -> Self {
        Self { policy, context }
    }

    #[must_use]
    pub const fn policy(&self) -> &LinkPolicy {
        &self.policy
    }

    /// Embeddable player/media URL for `video`.
    ///
    /// Unknown links are returned unchanged. A known link whose id cannot
    /// be extracted still gets its platform's template, with an empty id.
    #[must_use]
    pub fn embed(&self, video: &str) -> String {
        let platform = Platform::detect(video);
        self.embed_for(platform, platform.extract_id(video).as_deref(), video)
    }

    pub(crate) fn embed_for(&self, platform: Platform, id: Option<&str>, video: &str) -> String {
        match platform {
            Platform::Unknown => video.to_string(),
            known => self.embed_url(known, id.unwrap_or_default()),
        }
    }

    /// Thumbnail image URL for a link or bare id, `None` when unresolvable.
    #[must_use]
    pub fn thumbnail(&self, url_or_id: &str) -> Option<String> {
        if url_or_id.is_empty() {
            return None;
        }

        let platform = Platform::detect(url_or_id);
        let id = match platform {
            Platform::Youtube | Platform::Unknown if self.policy.bare_id_fallback => platform
                .extract_id(url_or_id)
                .or_else(|| looks_like_bare_id(url_or_id).then(|| url_or_id.to_string())),
            _ => platform.extract_id(url_or_id),
        }?;

        // A bare id on an unknown link is assumed to be a YouTube id.
        let platform = match platform {
            Platform::Unknown => Platform::Youtube,
            known => known,
        };
        self.thumbnail_url(platform, &id)
    }

    /// Embed template for an already extracted id.
    #[must_use]
    pub fn embed_url(&self, platform: Platform, id: &str) -> String {
        tracing::trace!(%platform, id, "Building embed url");
        match platform {
            Platform::Youtube => format!("https://www.youtube.com/embed/{id}"),
            Platform::Medal => match self.policy.medal {
                MedalLinks::Direct => format!("https://cdn.medal.tv/clip/{id}/720p.mp4"),
                MedalLinks::ClipPage => format!("https://medal.tv/clip/{id}"),
            },
            Platform::Twitch => format!(
                "https://clips.twitch.tv/embed?clip={id}&parent={}",
                self.context.hostname()
            ),
            Platform::GoogleDrive => format!("https://drive.google.com/file/d/{id}/preview"),
            Platform::Unknown => id.to_string(),
        }
    }

    /// Thumbnail template for an already extracted id.
    #[must_use]
    pub fn thumbnail_url(&self, platform: Platform, id: &str) -> Option<String> {
        tracing::trace!(%platform, id, "Building thumbnail url");
        let url = match platform {
            Platform::Youtube => format!("https://img.youtube.com/vi/{id}/mqdefault.jpg"),
            Platform::Medal => match self.policy.medal {
                MedalLinks::Direct => format!("https://cdn.medal.tv/clip/{id}/thumbnail.jpg"),
                MedalLinks::ClipPage => format!("https://medal.tv/clip/{id}"),
            },
            Platform::Twitch => {
                format!("https://clips-media-assets2.twitch.tv/{id}-preview-480x272.jpg")
            }
            Platform::GoogleDrive => {
                format!("https://drive.google.com/thumbnail?id={id}&sz=w544-h306")
            }
            Platform::Unknown => return None,
        };
        Some(url)
    }
}

/// [`Resolver::embed`] with the default policy and no known hostname.
#[must_use]
pub fn embed(video: &str) -> String {
    Resolver::default().embed(video)
}

/// [`Resolver::thumbnail`] with the default policy.
#[must_use]
pub fn thumbnail(url_or_id: &str) -> Option<String> {
    Resolver::default().thumbnail(url_or_id)
}
