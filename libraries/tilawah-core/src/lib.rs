//! Tilawah Core
//!
//! Platform-agnostic domain types and error handling for Tilawah, a
//! Quran reading and memorization tracker.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Content Types**: `Chapter`, `Verse`, `RevelationPlace` as served by the
//!   public content service
//! - **Session**: `UserSession`, the opaque "current user" handed over by the
//!   identity provider
//! - **Progress**: `ProgressDraft` / `ProgressEntry` for logging reading and
//!   memorization sessions
//! - **Goals & Statistics**: `ReadingGoals`, `ReadingStats`, `MonthlyPages`
//! - **Sample Data**: the hard-coded dashboard dataset (there is no backing
//!   database)
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tilawah_core::types::{Chapter, ProgressDraft, RevelationPlace, TrackingMode};
//! use chrono::NaiveDate;
//!
//! let al_ikhlas = Chapter {
//!     number: 112,
//!     arabic_name: "سُورَةُ الإِخْلَاصِ".to_string(),
//!     transliterated_name: "Al-Ikhlaas".to_string(),
//!     translated_name: "Sincerity".to_string(),
//!     verse_count: 4,
//!     revelation_place: RevelationPlace::Meccan,
//! };
//!
//! let mut draft = ProgressDraft::new();
//! draft.set_mode(TrackingMode::Memorization);
//! draft.select_chapter(&al_ikhlas);
//! draft.slide_to(10); // clamped to the chapter's 4 verses
//!
//! let entry = draft.submit(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).unwrap();
//! assert_eq!(entry.last_verse, 4);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod sample;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};

pub use types::{
    // Content
    Chapter, RevelationPlace, Verse, CHAPTER_COUNT,
    // Session
    SessionState, UserSession,
    // Progress
    ProgressDraft, ProgressEntry, TrackingMode,
    // Goals & statistics
    MonthlyPages, ReadingGoals, ReadingStats,
};
