//! Application configuration
//!
//! Settings are compiled into the bundle from `config/zaplink.toml`, which has one table
//! per build profile. The profile is chosen at build time through `ZAPLINK_PROFILE`.

use crate::error::CoreResult;
use crate::links::short_link;
use crate::session::DEFAULT_PROFILE_TTL_MS;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const EMBEDDED_CONFIG: &str = include_str!("../config/zaplink.toml");

/// Build profile selecting a table of the configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    #[default]
    Development,
    Production,
}

impl Profile {
    /// Profile baked in at compile time, development unless `ZAPLINK_PROFILE` says otherwise
    pub fn from_build_env() -> Self {
        option_env!("ZAPLINK_PROFILE")
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::Message(format!("Unknown profile: {other}"))),
        }
    }
}

/// Front-end settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base of every REST path
    pub api_base_url: String,
    /// Base of the OAuth authorization redirect
    pub auth_base_url: String,
    /// Base used when displaying short links
    pub short_url_base: String,
    pub profile_cache_ttl_ms: u64,
    pub preview_throttle_ms: u64,
    pub callback_redirect_delay_ms: u32,
    pub log_level: String,
}

fn default_profile_cache_ttl_ms() -> u64 {
    DEFAULT_PROFILE_TTL_MS.unsigned_abs()
}

fn default_preview_throttle_ms() -> u64 {
    2_000
}

fn default_callback_redirect_delay_ms() -> u32 {
    1_000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            auth_base_url: "http://localhost:8080".to_string(),
            short_url_base: "http://localhost:8080/api".to_string(),
            profile_cache_ttl_ms: default_profile_cache_ttl_ms(),
            preview_throttle_ms: default_preview_throttle_ms(),
            callback_redirect_delay_ms: default_callback_redirect_delay_ms(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load the embedded configuration for the build profile
    pub fn load() -> CoreResult<Self> {
        Self::from_toml(EMBEDDED_CONFIG, Profile::from_build_env())
    }

    /// Load one profile table from a TOML document; absent keys keep their defaults
    pub fn from_toml(document: &str, profile: Profile) -> CoreResult<Self> {
        let config = Config::builder()
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()?;

        let app_config: Self = match config.get(profile.as_str()) {
            Ok(app_config) => app_config,
            Err(ConfigError::NotFound(_)) => {
                tracing::warn!("No [{profile}] table in configuration, using defaults");
                Self::default()
            }
            Err(e) => return Err(e.into()),
        };

        app_config.validate()?;
        Ok(app_config)
    }

    /// Reject settings the client cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("api_base_url", &self.api_base_url),
            ("auth_base_url", &self.auth_base_url),
            ("short_url_base", &self.short_url_base),
        ] {
            validate_base_url(value, field)?;
        }

        if self.profile_cache_ttl_ms == 0 {
            return Err(ConfigError::Message(
                "profile_cache_ttl_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn profile_cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(i64::try_from(self.profile_cache_ttl_ms).unwrap_or(i64::MAX))
    }

    pub fn preview_throttle(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(i64::try_from(self.preview_throttle_ms).unwrap_or(i64::MAX))
    }

    /// Displayed form of the short link for `id`
    pub fn short_link(&self, id: &str) -> String {
        short_link(&self.short_url_base, id)
    }

    /// Address that redirects to the original URL of `id`
    pub fn redirect_link(&self, id: &str) -> String {
        short_link(&self.api_base_url, id)
    }
}

fn validate_base_url(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Message(format!("{field} cannot be empty")));
    }
    url::Url::parse(value)
        .map_err(|e| ConfigError::Message(format!("{field} is not a valid URL: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_embedded_profiles_load() {
        let dev = AppConfig::from_toml(EMBEDDED_CONFIG, Profile::Development).unwrap();
        assert_eq!(dev.api_base_url, "http://localhost:8080/api");
        assert_eq!(dev.auth_base_url, "http://localhost:8080");
        assert_eq!(dev.profile_cache_ttl(), chrono::Duration::seconds(10));
        assert_eq!(dev.preview_throttle_ms, 2_000);
        assert_eq!(dev.callback_redirect_delay_ms, 1_000);

        let prod = AppConfig::from_toml(EMBEDDED_CONFIG, Profile::Production).unwrap();
        assert_eq!(prod.log_level, "info");
    }

    #[test]
    fn test_default_ttl_matches_session_cache() {
        assert_eq!(
            AppConfig::default().profile_cache_ttl(),
            chrono::Duration::milliseconds(DEFAULT_PROFILE_TTL_MS)
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::from_toml(
            "[development]\napi_base_url = \"http://api.test/api\"\n",
            Profile::Development,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "http://api.test/api");
        assert_eq!(config.auth_base_url, "http://localhost:8080");
        assert_eq!(config.profile_cache_ttl_ms, 10_000);
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let result = AppConfig::from_toml(
            "[development]\nprofile_cache_ttl_ms = 0\n",
            Profile::Development,
        );
        assert!(matches!(result, Err(CoreError::InvalidConfig { .. })));
    }

    #[test]
    fn test_empty_url_rejected() {
        let config = AppConfig {
            short_url_base: " ".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_profile_parse_and_links() {
        assert_eq!("PROD".parse::<Profile>().unwrap(), Profile::Production);
        assert!("staging".parse::<Profile>().is_err());

        let config = AppConfig::default();
        assert_eq!(config.short_link("abc"), "http://localhost:8080/api/abc");
        assert_eq!(config.redirect_link("abc"), "http://localhost:8080/api/abc");
    }
}
