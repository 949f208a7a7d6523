//! Main content service client.

use crate::chapters::ChaptersClient;
use crate::error::{ContentClientError, Result};
use crate::types::{ChapterVerses, ContentConfig};
use reqwest::Client;
use std::time::Duration;
use tilawah_core::{Chapter, Verse};
use tracing::debug;
use url::Url;

/// Client for the public Quran content service.
///
/// Read-only; responses are not cached and failed requests are not retried.
///
/// # Example
///
/// ```ignore
/// use tilawah_content_client::{ContentConfig, QuranContentClient};
///
/// let client = QuranContentClient::new(ContentConfig::default())?;
/// let chapter = client.get_chapter(112).await?;
/// println!("{} ({} verses)", chapter.transliterated_name, chapter.verse_count);
/// ```
pub struct QuranContentClient {
    http: Client,
    config: ContentConfig,
}

impl QuranContentClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ContentConfig) -> Result<Self> {
        let base_url = normalize_url(&config.base_url)?;
        let audio_cdn = normalize_url(&config.audio_cdn)?;

        let normalized_config = ContentConfig {
            base_url,
            audio_cdn,
            ..config
        };

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(normalized_config.timeout_secs))
            .connect_timeout(Duration::from_secs(normalized_config.connect_timeout_secs))
            .user_agent(format!("Tilawah/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ContentClientError::Request)?;

        debug!(base_url = %normalized_config.base_url, "Created content client");

        Ok(Self {
            http,
            config: normalized_config,
        })
    }

    /// Get the normalized API base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Get the chapters client.
    pub fn chapters(&self) -> ChaptersClient<'_> {
        ChaptersClient::new(&self.http, &self.config)
    }

    /// List all chapters in service order.
    pub async fn list_chapters(&self) -> Result<Vec<Chapter>> {
        self.chapters().list_chapters().await
    }

    /// Get a single chapter descriptor.
    pub async fn get_chapter(&self, number: u32) -> Result<Chapter> {
        self.chapters().get_chapter(number).await
    }

    /// Get a chapter's ordered verses with audio URLs.
    pub async fn get_chapter_verses(&self, number: u32) -> Result<Vec<Verse>> {
        self.chapters().get_chapter_verses(number).await
    }

    /// Get a chapter and its verses in one request.
    pub async fn get_chapter_with_verses(&self, number: u32) -> Result<ChapterVerses> {
        self.chapters().get_chapter_with_verses(number).await
    }

    /// CDN URL for a single verse's recitation
    pub fn audio_url(&self, global_number: u32) -> String {
        crate::audio::audio_url(&self.config, global_number)
    }
}

/// Trim trailing slashes and require an absolute http(s) URL
fn normalize_url(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(ContentClientError::InvalidUrl("URL cannot be empty".into()));
    }

    let url = raw.trim().trim_end_matches('/').to_string();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ContentClientError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    Url::parse(&url).map_err(|e| ContentClientError::InvalidUrl(format!("{}: {}", url, e)))?;

    Ok(url)
}
