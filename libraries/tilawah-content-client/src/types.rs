//! Types for the content service API.

use serde::{Deserialize, Serialize};
use tilawah_core::{Chapter, Verse};

fn default_base_url() -> String {
    "https://api.alquran.cloud/v1".to_string()
}

fn default_audio_cdn() -> String {
    "https://cdn.islamic.network/quran/audio".to_string()
}

fn default_bitrate() -> u32 {
    128
}

fn default_reciter() -> String {
    "ar.alafasy".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

/// Content service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Base URL of the content API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Base URL of the recitation audio CDN
    #[serde(default = "default_audio_cdn")]
    pub audio_cdn: String,

    /// Audio bitrate segment of the CDN path (kbps)
    #[serde(default = "default_bitrate")]
    pub bitrate: u32,

    /// Reciter edition identifier
    #[serde(default = "default_reciter")]
    pub reciter: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl ContentConfig {
    /// Default configuration pointed at another API base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            audio_cdn: default_audio_cdn(),
            bitrate: default_bitrate(),
            reciter: default_reciter(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// Response envelope wrapping every payload: `{ code, status, data }`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: u16,
    pub status: String,
    pub data: T,
}

/// A chapter together with its ordered verses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterVerses {
    #[serde(flatten)]
    pub chapter: Chapter,

    #[serde(rename = "ayahs")]
    pub verses: Vec<Verse>,
}
