//! Recitation queue preview
//!
//! Runs the audio coordinator over a backend that "plays" every clip
//! instantly, so the terminal can show which verses autoplay would go
//! through from a starting verse.

use std::{cell::RefCell, rc::Rc};
use tilawah_core::{Chapter, CoreError, Verse};
use tilawah_playback::{
    AudioBackend, AudioClip, AudioCoordinator, ClipEvent, ClipNotifier, PlaybackConfig,
    PlaybackEvent, Result as PlaybackResult,
};
use tracing::debug;

/// One verse in the order it would be recited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedVerse {
    pub verse_number: u32,
    pub audio_url: String,
}

/// Backend whose clips finish as soon as they start
#[derive(Clone, Default)]
struct InstantBackend {
    loaded: Rc<RefCell<Vec<String>>>,
}

struct InstantClip {
    notifier: ClipNotifier,
}

impl AudioBackend for InstantBackend {
    fn load(&mut self, url: &str, notifier: ClipNotifier) -> PlaybackResult<Box<dyn AudioClip>> {
        self.loaded.borrow_mut().push(url.to_string());
        Ok(Box::new(InstantClip { notifier }))
    }
}

impl AudioClip for InstantClip {
    fn play(&mut self) -> PlaybackResult<()> {
        self.notifier.notify(ClipEvent::Playing);
        self.notifier.notify(ClipEvent::Ended);
        Ok(())
    }

    fn pause(&mut self) {}

    fn rewind(&mut self) {}
}

/// Verses that would sound, in order, when starting at `from`
pub fn recitation_queue(
    chapter: &Chapter,
    verses: Vec<Verse>,
    from: u32,
    autoplay: bool,
) -> Result<Vec<QueuedVerse>, CoreError> {
    let start = verses
        .iter()
        .find(|v| v.number_in_chapter == from)
        .ok_or_else(|| {
            CoreError::invalid_input(format!(
                "{} has no verse {}",
                chapter.transliterated_name, from
            ))
        })?;
    let url = start
        .audio_url
        .clone()
        .filter(|url| !url.is_empty())
        .ok_or_else(|| CoreError::invalid_input(format!("verse {} has no audio", from)))?;

    let backend = InstantBackend::default();
    let loaded = Rc::clone(&backend.loaded);
    let mut coordinator = AudioCoordinator::new(Box::new(backend), PlaybackConfig { autoplay });

    coordinator.play(&url, from, chapter, verses);
    let processed = coordinator.pump();
    debug!(notifications = processed, "Recitation preview finished");

    let verse_numbers = coordinator
        .drain_events()
        .into_iter()
        .filter_map(|event| match event {
            PlaybackEvent::VerseChanged {
                verse_number: Some(n),
                ..
            } => Some(n),
            _ => None,
        });

    let queue = verse_numbers
        .zip(loaded.borrow().iter().cloned())
        .map(|(verse_number, audio_url)| QueuedVerse {
            verse_number,
            audio_url,
        })
        .collect();

    Ok(queue)
}
