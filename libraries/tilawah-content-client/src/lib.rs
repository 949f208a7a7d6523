//! Tilawah Content Client
//!
//! HTTP client for the public Quran content service (chapters, verses and
//! recitation audio locations).
//!
//! # Features
//!
//! - **Chapters**: list all 114 chapters or fetch one by number
//! - **Verses**: fetch a chapter's ordered verses with audio URLs filled in
//! - **Audio URLs**: build the CDN location of any verse's recitation
//!
//! # Example
//!
//! ```ignore
//! use tilawah_content_client::{ContentConfig, QuranContentClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QuranContentClient::new(ContentConfig::default())?;
//!
//!     let chapters = client.list_chapters().await?;
//!     println!("{} chapters", chapters.len());
//!
//!     let verses = client.get_chapter_verses(112).await?;
//!     for verse in &verses {
//!         println!("{} {:?}", verse.number_in_chapter, verse.audio_url);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod audio;
mod chapters;
mod client;
mod error;
mod types;

// Re-export main types
pub use audio::audio_url;
pub use chapters::ChaptersClient;
pub use client::QuranContentClient;
pub use error::{ContentClientError, Result};
pub use types::{ApiEnvelope, ChapterVerses, ContentConfig};
