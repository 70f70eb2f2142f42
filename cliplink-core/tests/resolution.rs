//! End-to-end link resolution across every supported link form

use cliplink_core::extract;
use cliplink_core::{
    detect_platform, embed, thumbnail, EmbedContext, LinkPolicy, MedalLinks, Platform, Resolver,
};

struct Case {
    url: &'static str,
    platform: Platform,
    id: &'static str,
}

const CASES: &[Case] = &[
    Case {
        url: "https://youtu.be/dQw4w9WgXcQ",
        platform: Platform::Youtube,
        id: "dQw4w9WgXcQ",
    },
    Case {
        url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL1",
        platform: Platform::Youtube,
        id: "dQw4w9WgXcQ",
    },
    Case {
        url: "https://www.youtube.com/embed/dQw4w9WgXcQ",
        platform: Platform::Youtube,
        id: "dQw4w9WgXcQ",
    },
    Case {
        url: "https://medal.tv/clip/m3dal1",
        platform: Platform::Medal,
        id: "m3dal1",
    },
    Case {
        url: "https://medal.tv/clips/m3dal1/abc",
        platform: Platform::Medal,
        id: "m3dal1",
    },
    Case {
        url: "https://medal.tv/games/fortnite/clips/m3dal1?theater=true",
        platform: Platform::Medal,
        id: "m3dal1",
    },
    Case {
        url: "https://clips.twitch.tv/BraveSlug-xyz",
        platform: Platform::Twitch,
        id: "BraveSlug-xyz",
    },
    Case {
        url: "https://www.twitch.tv/someone/clip/BraveSlug-xyz",
        platform: Platform::Twitch,
        id: "BraveSlug-xyz",
    },
    Case {
        url: "https://twitch.tv/clip/BraveSlug-xyz#t",
        platform: Platform::Twitch,
        id: "BraveSlug-xyz",
    },
    Case {
        url: "https://drive.google.com/file/d/1FiLe_id/view",
        platform: Platform::GoogleDrive,
        id: "1FiLe_id",
    },
    Case {
        url: "https://drive.google.com/open?id=1FiLe_id",
        platform: Platform::GoogleDrive,
        id: "1FiLe_id",
    },
    Case {
        url: "https://drive.google.com/uc?id=1FiLe_id&export=download",
        platform: Platform::GoogleDrive,
        id: "1FiLe_id",
    },
];

#[test]
fn test_detect_and_extract_every_form() {
    for case in CASES {
        assert_eq!(Platform::detect(case.url), case.platform, "{}", case.url);
        assert_eq!(detect_platform(Some(case.url)), case.platform, "{}", case.url);
        assert_eq!(case.platform.extract_id(case.url).as_deref(), Some(case.id), "{}", case.url);
    }
}

#[test]
fn test_every_form_resolves() {
    let resolver = Resolver::default();
    for case in CASES {
        let resolved = resolver.resolve(case.url);
        assert_eq!(resolved.platform, case.platform);
        assert_eq!(resolved.id.as_deref(), Some(case.id));
        assert!(resolved.embed_url.contains(case.id), "{}", resolved.embed_url);
        assert!(resolved.thumbnail_url.is_some(), "{}", case.url);
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(
        embed("https://youtu.be/dQw4w9WgXcQ"),
        "https://www.youtube.com/embed/dQw4w9WgXcQ"
    );
    assert_eq!(
        embed("https://clips.twitch.tv/AbcSlug123"),
        "https://clips.twitch.tv/embed?clip=AbcSlug123&parent=localhost"
    );
    assert_eq!(
        thumbnail("dQw4w9WgXcQ").as_deref(),
        Some("https://img.youtube.com/vi/dQw4w9WgXcQ/mqdefault.jpg")
    );
    assert_eq!(Platform::detect(""), Platform::Unknown);
    assert_eq!(detect_platform(None), Platform::Unknown);
    assert_eq!(extract::youtube_id(""), None);
}

#[test]
fn test_legacy_policy_medal_links() {
    let resolver = Resolver::new(LinkPolicy::legacy(), EmbedContext::default());
    let resolved = resolver.resolve("https://medal.tv/clip/m3dal1");

    assert_eq!(resolver.policy().medal, MedalLinks::Direct);
    assert_eq!(resolved.embed_url, "https://cdn.medal.tv/clip/m3dal1/720p.mp4");
    assert_eq!(
        resolved.thumbnail_url.as_deref(),
        Some("https://cdn.medal.tv/clip/m3dal1/thumbnail.jpg")
    );
}

#[test]
fn test_extractors_ignore_other_platforms() {
    let youtube = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
    assert_eq!(extract::medal_id(youtube), None);
    assert_eq!(extract::twitch_clip_id(youtube), None);
    assert_eq!(extract::google_drive_id(youtube), None);
}
