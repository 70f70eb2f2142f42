use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::builder::{EmbedContext, LinkPolicy, Resolver};
use crate::error::{Error, Result};
use crate::localize::{LocaleFormatter, MAX_FRACTION_DIGITS};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CLIPLINK_CONFIG_PATH";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "cliplink.yaml";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub links: LinkPolicy,
    pub embed: EmbedContext,
    pub locale: LocaleFormatter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "pretty"
    pub file_path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
            file_path: None,
        }
    }
}

impl Config {
    /// Load configuration from multiple sources with priority:
    /// 1. Environment variables (highest priority)
    /// 2. Config file (if provided)
    /// 3. Defaults (lowest priority)
    pub fn load(config_file: Option<&str>) -> std::result::Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_file {
            if Path::new(path).exists() {
                builder = builder.add_source(File::with_name(path));
            }
        }

        // CLIPLINK_LINKS__BARE_ID_FALLBACK, CLIPLINK_EMBED__HOSTNAME, ...
        builder = builder.add_source(
            Environment::with_prefix("CLIPLINK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Load from environment variables only
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Load from file path
    pub fn from_file(path: &str) -> std::result::Result<Self, ConfigError> {
        Self::load(Some(path))
    }

    /// Check values the type system cannot, collecting every problem.
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Some(hostname) = self.embed.hostname.as_deref() {
            if url::Host::parse(hostname).is_err() {
                errors.push(format!("embed.hostname is not a valid host: {hostname:?}"));
            }
        }

        if crate::logging::parse_log_level(&self.logging.level).is_err() {
            errors.push(format!("logging.level is invalid: {:?}", self.logging.level));
        }

        if !matches!(self.logging.format.as_str(), "json" | "pretty") {
            errors.push(format!(
                "logging.format must be \"json\" or \"pretty\", got {:?}",
                self.logging.format
            ));
        }

        if self.locale.decimal_separator.is_empty() {
            errors.push("locale.decimal_separator must not be empty".to_string());
        }

        if self.locale.decimal_separator == self.locale.group_separator {
            errors.push(
                "locale.decimal_separator and locale.group_separator must differ".to_string(),
            );
        }

        if self.locale.min_fraction_digits > MAX_FRACTION_DIGITS {
            errors.push(format!(
                "locale.min_fraction_digits must be at most {MAX_FRACTION_DIGITS}"
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Resolver configured with this policy and embed context.
    #[must_use]
    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.links, self.embed.clone())
    }
}

/// Load and validate configuration, see [`find_config`] for the search order.
pub fn load_config(explicit: Option<&str>) -> Result<Config> {
    let config = find_config(explicit)?;

    config
        .validate()
        .map_err(|errors| Error::InvalidConfig(errors.join("; ")))?;

    Ok(config)
}

/// Load configuration from a config file or environment variables, without
/// validating it, so callers can layer overrides on top first.
///
/// Config file search order:
/// 1. `explicit` (e.g. a `--config` flag)
/// 2. `CLIPLINK_CONFIG_PATH` environment variable
/// 3. ./cliplink.yaml (current working directory)
/// 4. Fall back to environment variables only
pub fn find_config(explicit: Option<&str>) -> Result<Config> {
    let config_path = explicit
        .map(str::to_string)
        .or_else(|| std::env::var(CONFIG_PATH_ENV).ok())
        .or_else(|| {
            Path::new(DEFAULT_CONFIG_FILE)
                .exists()
                .then(|| DEFAULT_CONFIG_FILE.to_string())
        });

    match config_path {
        Some(path) => {
            if !Path::new(&path).exists() {
                return Err(Error::InvalidConfig(format!("config file not found: {path}")));
            }
            Ok(Config::from_file(&path)?)
        }
        None => Ok(Config::from_env()?),
    }
}
