//! One-shot link resolution

use serde::{Deserialize, Serialize};

use crate::builder::Resolver;
use crate::platform::Platform;

/// Everything known about a video link after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedVideo {
    pub platform: Platform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub embed_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl ResolvedVideo {
    /// Whether an identifier was found.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.id.is_some()
    }
}

impl Resolver {
    /// Detect, extract and build both URLs for `video` in one pass.
    #[must_use]
    pub fn resolve(&self, video: &str) -> ResolvedVideo {
        let platform = Platform::detect(video);
        let id = platform.extract_id(video);

        let embed_url = self.embed_for(platform, id.as_deref(), video);

        ResolvedVideo {
            platform,
            id,
            embed_url,
            thumbnail_url: self.thumbnail(video),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{EmbedContext, LinkPolicy};

    #[test]
    fn test_resolve_twitch() {
        let resolver =
            Resolver::new(LinkPolicy::default(), EmbedContext::with_hostname("example.org"));
        let resolved = resolver.resolve("https://clips.twitch.tv/AbcSlug123");

        assert_eq!(resolved.platform, Platform::Twitch);
        assert_eq!(resolved.id.as_deref(), Some("AbcSlug123"));
        assert_eq!(
            resolved.embed_url,
            "https://clips.twitch.tv/embed?clip=AbcSlug123&parent=example.org"
        );
        assert_eq!(
            resolved.thumbnail_url.as_deref(),
            Some("https://clips-media-assets2.twitch.tv/AbcSlug123-preview-480x272.jpg")
        );
        assert!(resolved.is_resolved());
    }

    #[test]
    fn test_resolve_matches_individual_operations() {
        let resolver = Resolver::default();
        let url = "https://drive.google.com/file/d/1AbC-xyz/view";
        let resolved = resolver.resolve(url);

        assert_eq!(resolved.embed_url, resolver.embed(url));
        assert_eq!(resolved.thumbnail_url, resolver.thumbnail(url));
    }

    #[test]
    fn test_resolve_known_platform_without_id() {
        let resolved = Resolver::default().resolve("https://www.youtube.com/");
        assert_eq!(resolved.platform, Platform::Youtube);
        assert!(!resolved.is_resolved());
        assert_eq!(resolved.embed_url, "https://www.youtube.com/embed/");
        assert_eq!(resolved.thumbnail_url, None);
    }

    #[test]
    fn test_resolve_unknown() {
        let resolved = Resolver::default().resolve("https://vimeo.com/12345");
        assert_eq!(resolved.platform, Platform::Unknown);
        assert!(!resolved.is_resolved());
        assert_eq!(resolved.embed_url, "https://vimeo.com/12345");
        assert_eq!(resolved.thumbnail_url, None);
    }

    #[test]
    fn test_resolved_json_shape() {
        let resolved = Resolver::default().resolve("https://youtu.be/dQw4w9WgXcQ");
        let json = serde_json::to_value(&resolved).unwrap();

        assert_eq!(json["platform"], "youtube");
        assert_eq!(json["id"], "dQw4w9WgXcQ");
        assert_eq!(json["embed_url"], "https://www.youtube.com/embed/dQw4w9WgXcQ");

        let unknown = serde_json::to_value(Resolver::default().resolve("nope")).unwrap();
        assert!(unknown.get("id").is_none());
        assert!(unknown.get("thumbnail_url").is_none());
    }
}
