// Cliplink Core
//
// Resolves links to third-party video clips (YouTube, Medal.tv, Twitch,
// Google Drive) into platform identifiers, embeddable URLs and thumbnails.
//
// Architecture:
// - platform: URL -> Platform tag
// - extract:  Platform-specific identifier extraction (regex based)
// - builder:  Embed / thumbnail URL templates behind a Resolver
// - resolve:  One-shot resolution into a serializable ResolvedVideo
// - shuffle, localize: standalone utilities used by the front-end

pub mod builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod localize;
pub mod logging;
pub mod platform;
pub mod resolve;
pub mod shuffle;

pub use crate::builder::{embed, thumbnail, EmbedContext, LinkPolicy, MedalLinks, Resolver};
pub use crate::config::{find_config, load_config, Config};
pub use crate::error::{Error, Result};
pub use crate::localize::{localize, LocaleFormatter, NumberFormatter};
pub use crate::platform::{detect_platform, Platform};
pub use crate::resolve::ResolvedVideo;
pub use crate::shuffle::{shuffle, shuffle_with};
