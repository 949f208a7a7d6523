//! Reading / memorization progress logging
//!
//! Mirrors the "add progress" form: pick a mode, pick a chapter, choose the
//! last verse reached, submit. Entries are handed back to the caller and
//! are not persisted anywhere.

use super::Chapter;
use crate::error::{CoreError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What kind of session is being logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingMode {
    #[default]
    Reading,
    Memorization,
}

/// A submitted progress record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    #[serde(rename = "type")]
    pub mode: TrackingMode,
    pub date: NaiveDate,
    pub chapter_number: u32,
    pub last_verse: u32,
}

/// Form state for a progress entry being composed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressDraft {
    mode: TrackingMode,
    chapter_number: Option<u32>,
    last_verse: u32,
    max_verse: u32,
}

impl Default for ProgressDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressDraft {
    pub fn new() -> Self {
        Self {
            mode: TrackingMode::Reading,
            chapter_number: None,
            last_verse: 1,
            max_verse: 0,
        }
    }

    /// Reset to a blank reading entry (dialog re-opened)
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: TrackingMode) {
        self.mode = mode;
    }

    pub fn chapter_number(&self) -> Option<u32> {
        self.chapter_number
    }

    pub fn last_verse(&self) -> u32 {
        self.last_verse
    }

    /// Verse count of the selected chapter, 0 before selection
    pub fn max_verse(&self) -> u32 {
        self.max_verse
    }

    /// Select a chapter; the last verse restarts at 1
    pub fn select_chapter(&mut self, chapter: &Chapter) {
        self.chapter_number = Some(chapter.number);
        self.max_verse = chapter.verse_count;
        self.last_verse = 1;
    }

    /// Select a chapter by number out of an already fetched chapter list
    pub fn select_chapter_number(&mut self, number: u32, chapters: &[Chapter]) -> Result<()> {
        if !Chapter::is_valid_number(number) {
            return Err(CoreError::InvalidChapter(number));
        }
        let chapter = chapters
            .iter()
            .find(|c| c.number == number)
            .ok_or(CoreError::ChapterNotFound(number))?;
        self.select_chapter(chapter);
        Ok(())
    }

    /// Typed verse number. Out-of-range input is ignored.
    ///
    /// Returns whether the value was accepted.
    pub fn set_last_verse(&mut self, verse: u32) -> bool {
        if self.chapter_number.is_none() {
            return false;
        }
        if verse >= 1 && verse <= self.upper_bound() {
            self.last_verse = verse;
            true
        } else {
            false
        }
    }

    /// Slider input, clamped into the chapter's verse range
    pub fn slide_to(&mut self, verse: u32) {
        if self.chapter_number.is_none() {
            return;
        }
        self.last_verse = verse.clamp(1, self.upper_bound());
    }

    /// How far into the chapter the last verse is, in percent
    pub fn completion_percent(&self) -> f64 {
        if self.max_verse == 0 {
            0.0
        } else {
            f64::from(self.last_verse) / f64::from(self.max_verse) * 100.0
        }
    }

    pub fn submit(&self, date: NaiveDate) -> Result<ProgressEntry> {
        let chapter_number = self.chapter_number.ok_or(CoreError::NoChapterSelected)?;
        Ok(ProgressEntry {
            mode: self.mode,
            date,
            chapter_number,
            last_verse: self.last_verse,
        })
    }

    fn upper_bound(&self) -> u32 {
        self.max_verse.max(1)
    }
}
