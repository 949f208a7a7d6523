//! Verse ("ayah") types

use serde::{Deserialize, Serialize};

/// A single verse of a chapter.
///
/// `number_in_chapter` orders verses within their chapter; `global_number`
/// is unique across the whole corpus and is what bookmarks and audio files
/// are keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    #[serde(rename = "number")]
    pub global_number: u32,

    pub text: String,

    #[serde(rename = "numberInSurah")]
    pub number_in_chapter: u32,

    #[serde(rename = "juz")]
    pub juz_index: u32,

    #[serde(rename = "page")]
    pub page_number: u32,

    /// Recitation audio; absent when no reciter edition was requested
    #[serde(rename = "audio", default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl Verse {
    pub fn has_audio(&self) -> bool {
        self.audio_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}
