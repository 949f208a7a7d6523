//! Hard-coded dashboard data.
//!
//! There is no backing store for progress yet, so every page renders these
//! figures.

use crate::types::{MonthlyPages, ReadingStats};
use serde::Serialize;

/// Headline percentages on the home page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressOverview {
    pub reading_percent: u32,
    pub reading_subtitle: String,
    pub memorization_percent: u32,
    pub memorization_subtitle: String,
    pub daily_target_percent: u32,
    pub daily_target_subtitle: String,
}

/// Pages read on one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPages {
    pub day: &'static str,
    pub pages: u32,
}

/// A chapter the user has memorized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemorizedChapter {
    pub name: &'static str,
    pub verse_count: u32,
    pub is_memorized: bool,
}

/// Completion row on the statistics page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterCompletion {
    pub name: &'static str,
    pub total_verses: u32,
    pub read_count: u32,
    pub last_read: &'static str,
}

impl ChapterCompletion {
    /// Bar width, where five full readings fill the bar
    pub fn completion_percent(&self) -> u32 {
        (self.read_count * 100 / 5).min(100)
    }
}

pub fn progress_overview() -> ProgressOverview {
    ProgressOverview {
        reading_percent: 65,
        reading_subtitle: "Juz 17 of 30".to_string(),
        memorization_percent: 30,
        memorization_subtitle: "3 of 10 target juz".to_string(),
        daily_target_percent: 80,
        daily_target_subtitle: "4 of 5 pages".to_string(),
    }
}

pub fn weekly_pages() -> Vec<DailyPages> {
    [("Mon", 3), ("Tue", 4), ("Wed", 2), ("Thu", 5), ("Fri", 3), ("Sat", 0), ("Sun", 2)]
        .into_iter()
        .map(|(day, pages)| DailyPages { day, pages })
        .collect()
}

pub fn memorized_chapters() -> Vec<MemorizedChapter> {
    [
        ("Al-Fatihah", 7),
        ("Al-Ikhlas", 4),
        ("Al-Falaq", 5),
        ("An-Nas", 6),
        ("Al-Kauthar", 3),
        ("Al-Asr", 3),
    ]
    .into_iter()
    .map(|(name, verse_count)| MemorizedChapter {
        name,
        verse_count,
        is_memorized: true,
    })
    .collect()
}

pub fn reading_stats() -> ReadingStats {
    ReadingStats {
        total_pages: 604,
        pages_this_month: 42,
        pages_last_month: 38,
        average_daily_pages: 1.4,
        current_streak: 5,
        longest_streak: 12,
    }
}

pub fn monthly_pages() -> Vec<MonthlyPages> {
    [
        ("Jan", 28),
        ("Feb", 32),
        ("Mar", 38),
        ("Apr", 42),
        ("May", 35),
        ("Jun", 40),
        ("Jul", 45),
        ("Aug", 0),
        ("Sep", 0),
        ("Oct", 0),
        ("Nov", 0),
        ("Dec", 0),
    ]
    .into_iter()
    .map(|(month, pages)| MonthlyPages::new(month, pages))
    .collect()
}

pub fn chapter_completion() -> Vec<ChapterCompletion> {
    [
        ("Al-Baqarah", 286, 3, "2 days ago"),
        ("Ali Imran", 200, 2, "1 week ago"),
        ("An-Nisa", 176, 1, "2 weeks ago"),
        ("Al-Maidah", 120, 4, "3 days ago"),
        ("Al-Anam", 165, 0, "Not read yet"),
    ]
    .into_iter()
    .map(|(name, total_verses, read_count, last_read)| ChapterCompletion {
        name,
        total_verses,
        read_count,
        last_read,
    })
    .collect()
}
