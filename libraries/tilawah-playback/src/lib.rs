//! Tilawah - Verse Playback
//!
//! Platform-agnostic recitation playback for Tilawah.
//!
//! This crate provides:
//! - A single [`AudioCoordinator`] owning at most one audio clip
//! - Play / pause / stop and tap-again-to-stop on the same verse
//! - Autoplay through the rest of a chapter
//! - A stale-notification guard keyed by [`ClipId`]
//! - An event queue for keeping UI surfaces in sync
//!
//! # Architecture
//!
//! `tilawah-playback` never touches an audio device itself. The platform
//! provides an [`AudioBackend`] that creates [`AudioClip`]s; clips report
//! back asynchronously through a [`ClipNotifier`], and the coordinator
//! applies those notifications in [`AudioCoordinator::pump`].
//!
//! With the `wasm` feature a backend over `HtmlAudioElement` and a
//! `wasm_bindgen` wrapper are available in [`wasm`].
//!
//! # Example
//!
//! ```rust
//! use tilawah_playback::{
//!     AudioBackend, AudioClip, AudioCoordinator, ClipEvent, ClipNotifier, Result,
//! };
//! use tilawah_core::{Chapter, RevelationPlace, Verse};
//!
//! // A clip that starts immediately
//! struct InstantClip(ClipNotifier);
//!
//! impl AudioClip for InstantClip {
//!     fn play(&mut self) -> Result<()> {
//!         self.0.notify(ClipEvent::Playing);
//!         Ok(())
//!     }
//!     fn pause(&mut self) {
//!         self.0.notify(ClipEvent::Paused);
//!     }
//!     fn rewind(&mut self) {}
//! }
//!
//! struct InstantBackend;
//!
//! impl AudioBackend for InstantBackend {
//!     fn load(&mut self, _url: &str, notifier: ClipNotifier) -> Result<Box<dyn AudioClip>> {
//!         Ok(Box::new(InstantClip(notifier)))
//!     }
//! }
//!
//! let chapter = Chapter {
//!     number: 112,
//!     arabic_name: "الإخلاص".to_string(),
//!     transliterated_name: "Al-Ikhlas".to_string(),
//!     translated_name: "Sincerity".to_string(),
//!     verse_count: 4,
//!     revelation_place: RevelationPlace::Meccan,
//! };
//! let verses: Vec<Verse> = Vec::new();
//!
//! let mut coordinator = AudioCoordinator::with_backend(Box::new(InstantBackend));
//! coordinator.play("https://audio.example/6222.mp3", 1, &chapter, verses);
//! coordinator.pump();
//!
//! assert!(coordinator.is_playing());
//! assert_eq!(coordinator.current_verse_number(), Some(1));
//! ```

mod clip;
mod coordinator;
mod error;
pub mod events;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use clip::{AudioBackend, AudioClip, ClipEvent, ClipId, ClipNotification, ClipNotifier};
pub use coordinator::AudioCoordinator;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use types::{PlaybackConfig, PlaybackSnapshot, PlaybackState};
