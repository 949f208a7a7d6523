//! Chapter and verse lookups.

use crate::audio::audio_url;
use crate::error::{ContentClientError, Result};
use crate::types::{ApiEnvelope, ChapterVerses, ContentConfig};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tilawah_core::{Chapter, Verse};
use tracing::debug;

/// Chapter client for the content service.
pub struct ChaptersClient<'a> {
    http: &'a Client,
    config: &'a ContentConfig,
}

impl<'a> ChaptersClient<'a> {
    pub(crate) fn new(http: &'a Client, config: &'a ContentConfig) -> Self {
        Self { http, config }
    }

    /// List all chapters in service order.
    pub async fn list_chapters(&self) -> Result<Vec<Chapter>> {
        let url = format!("{}/surah", self.config.base_url);
        debug!(url = %url, "Fetching chapter list");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ContentClientError::from_send)?;

        let status = response.status();

        if status.is_success() {
            let chapters: Vec<Chapter> = parse_envelope(response, "chapter list").await?;
            debug!(chapters = chapters.len(), "Fetched chapter list");
            Ok(chapters)
        } else {
            Err(service_error(status, response).await)
        }
    }

    /// Get a single chapter descriptor.
    pub async fn get_chapter(&self, number: u32) -> Result<Chapter> {
        check_chapter(number)?;

        let url = format!("{}/surah/{}", self.config.base_url, number);
        debug!(url = %url, chapter = number, "Fetching chapter");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ContentClientError::from_send)?;

        let status = response.status();

        if status.is_success() {
            parse_envelope(response, "chapter").await
        } else if status == StatusCode::NOT_FOUND {
            Err(chapter_not_found(number))
        } else {
            Err(service_error(status, response).await)
        }
    }

    /// Get a chapter with its ordered verses.
    ///
    /// Every verse's `audio_url` is built from the configured CDN; whatever
    /// audio field the service sent is discarded.
    pub async fn get_chapter_with_verses(&self, number: u32) -> Result<ChapterVerses> {
        check_chapter(number)?;

        let url = format!(
            "{}/surah/{}/{}",
            self.config.base_url, number, self.config.reciter
        );
        debug!(url = %url, chapter = number, "Fetching chapter verses");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ContentClientError::from_send)?;

        let status = response.status();

        if status.is_success() {
            let mut content: ChapterVerses = parse_envelope(response, "chapter verses").await?;
            for verse in &mut content.verses {
                verse.audio_url = Some(audio_url(self.config, verse.global_number));
            }

            debug!(
                chapter = number,
                verses = content.verses.len(),
                "Fetched chapter verses"
            );

            Ok(content)
        } else if status == StatusCode::NOT_FOUND {
            Err(chapter_not_found(number))
        } else {
            Err(service_error(status, response).await)
        }
    }

    /// Get a chapter's ordered verses with audio URLs.
    pub async fn get_chapter_verses(&self, number: u32) -> Result<Vec<Verse>> {
        Ok(self.get_chapter_with_verses(number).await?.verses)
    }
}

fn check_chapter(number: u32) -> Result<()> {
    if Chapter::is_valid_number(number) {
        Ok(())
    } else {
        Err(ContentClientError::InvalidChapter(number))
    }
}

fn chapter_not_found(number: u32) -> ContentClientError {
    ContentClientError::ServiceError {
        status: StatusCode::NOT_FOUND.as_u16(),
        message: format!("Chapter not found: {}", number),
    }
}

async fn service_error(status: StatusCode, response: Response) -> ContentClientError {
    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        status.canonical_reason().unwrap_or_default().to_string()
    } else {
        body
    };

    ContentClientError::ServiceError {
        status: status.as_u16(),
        message,
    }
}

/// Decode `{ code, status, data }` and unwrap `data`
async fn parse_envelope<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let envelope: ApiEnvelope<T> = response.json().await.map_err(|e| {
        ContentClientError::ParseError(format!("Failed to parse {} response: {}", what, e))
    })?;

    // `code` mirrors the HTTP status
    if envelope.code >= 400 {
        return Err(ContentClientError::ServiceError {
            status: envelope.code,
            message: envelope.status,
        });
    }

    Ok(envelope.data)
}
