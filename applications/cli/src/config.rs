/// CLI configuration
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tilawah_content_client::ContentConfig;
use tilawah_core::{ReadingGoals, SessionState, UserSession};
use tilawah_playback::PlaybackConfig;

/// Default configuration file, read from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "tilawah.toml";

/// Prefix of environment overrides, e.g. `TILAWAH_CONTENT__RECITER`
pub const ENV_PREFIX: &str = "TILAWAH";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub profile: ProfileSettings,

    #[serde(default)]
    pub goals: ReadingGoals,
}

/// The signed-in user; stands in for the identity provider
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProfileSettings {
    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub email: String,
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_sources(path, default_environment())
    }

    /// Load from an optional file overlaid by the given environment source
    pub fn from_sources(path: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.display().to_string()));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(environment);

        let mut config: AppConfig = settings.build()?.try_deserialize()?;
        config.goals = config.goals.clamped();

        tracing::debug!(
            base_url = %config.content.base_url,
            reciter = %config.content.reciter,
            autoplay = config.playback.autoplay,
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        check_http_url("content.base_url", &self.content.base_url)?;
        check_http_url("content.audio_cdn", &self.content.audio_cdn)?;

        if self.content.reciter.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "content.reciter cannot be empty".to_string(),
            ));
        }

        if self.content.bitrate == 0 {
            return Err(ConfigError::Invalid(
                "content.bitrate must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Current session, if a profile is configured
    pub fn session(&self) -> SessionState {
        let session = UserSession::new(
            self.profile.display_name.trim(),
            self.profile.email.trim(),
        );
        (!session.is_blank()).then_some(session)
    }
}

fn default_environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn check_http_url(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{} cannot be empty", key)));
    }
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(ConfigError::Invalid(format!(
            "{} must start with http:// or https:// (got {})",
            key, value
        )));
    }
    Ok(())
}
