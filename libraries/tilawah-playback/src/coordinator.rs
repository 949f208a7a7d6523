//! Audio coordinator - the single authority over verse playback
//!
//! Owns at most one clip at a time, reacts to the clip's own notifications,
//! and advances through a chapter when autoplay is on.

use crate::{
    clip::{AudioBackend, AudioClip, ClipEvent, ClipId, ClipNotification, ClipNotifier},
    events::PlaybackEvent,
    types::{PlaybackConfig, PlaybackSnapshot, PlaybackState},
};
use crossbeam_channel::{Receiver, Sender};
use std::rc::Rc;
use tilawah_core::{Chapter, Verse};
use tracing::{debug, info, warn};

/// The clip currently owned by the coordinator
struct ActiveClip {
    id: ClipId,
    clip: Box<dyn AudioClip>,
}

impl ActiveClip {
    /// Silence the clip and release it
    fn halt(mut self) {
        self.clip.pause();
        self.clip.rewind();
    }
}

/// Central verse playback coordination
///
/// One instance per application session, shared by every UI surface that
/// can start or control recitation (verse play buttons, the mini-player).
///
/// Guarantees:
/// - at most one clip exists; a previous clip is paused, rewound and
///   released before the next one is created
/// - the current verse and chapter are either both set or both cleared
/// - `is_playing` only follows notifications from the clip itself
/// - notifications from a clip that is no longer active are ignored
///
/// All methods are meant to be called from a single (UI) thread. Clip
/// notifications are queued and applied by [`AudioCoordinator::pump`].
pub struct AudioCoordinator {
    backend: Box<dyn AudioBackend>,
    active: Option<ActiveClip>,

    // Playback identity
    state: PlaybackState,
    current_verse_number: Option<u32>,
    current_chapter: Option<Chapter>,
    chapter_verses: Option<Rc<[Verse]>>,

    // Settings
    autoplay: bool,

    // Clip notification inbox
    next_clip_id: u64,
    inbox_tx: Sender<ClipNotification>,
    inbox_rx: Receiver<ClipNotification>,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl AudioCoordinator {
    /// Create a new coordinator around a platform backend
    pub fn new(backend: Box<dyn AudioBackend>, config: PlaybackConfig) -> Self {
        let (inbox_tx, inbox_rx) = crossbeam_channel::unbounded();

        Self {
            backend,
            active: None,
            state: PlaybackState::Idle,
            current_verse_number: None,
            current_chapter: None,
            chapter_verses: None,
            autoplay: config.autoplay,
            next_clip_id: 1,
            inbox_tx,
            inbox_rx,
            pending_events: Vec::new(),
        }
    }

    /// Create a coordinator with the default configuration
    pub fn with_backend(backend: Box<dyn AudioBackend>) -> Self {
        Self::new(backend, PlaybackConfig::default())
    }

    // ===== Transport =====

    /// Play a verse's recitation.
    ///
    /// Any active clip is stopped first. Requesting the verse that was
    /// already loaded (same chapter number and verse number) leaves
    /// playback stopped: tapping a playing verse again stops it.
    ///
    /// `chapter_verses` is the chapter's full, ordered verse list; it is
    /// kept as the lookahead for autoplay.
    ///
    /// Failures to create or start the clip are logged and leave the
    /// coordinator idle.
    pub fn play(
        &mut self,
        audio_url: &str,
        verse_number: u32,
        chapter: &Chapter,
        chapter_verses: impl Into<Rc<[Verse]>>,
    ) {
        let previous = self.active_pair();

        if let Some(active) = self.active.take() {
            debug!(clip = %active.id, "Stopping previous clip");
            active.halt();
        }

        if previous == Some((chapter.number, verse_number)) {
            info!(
                chapter = chapter.number,
                verse = verse_number,
                "Same verse requested again, stopping playback"
            );
            self.clear();
            return;
        }

        let id = self.allocate_clip_id();
        let notifier = ClipNotifier::new(id, self.inbox_tx.clone());

        let mut clip = match self.backend.load(audio_url, notifier) {
            Ok(clip) => clip,
            Err(e) => {
                warn!(url = %audio_url, error = %e, "Could not load verse audio");
                self.fail(e.to_string());
                return;
            }
        };

        if let Err(e) = clip.play() {
            warn!(url = %audio_url, error = %e, "Could not start verse audio");
            self.fail(e.to_string());
            return;
        }

        debug!(
            clip = %id,
            chapter = chapter.number,
            verse = verse_number,
            url = %audio_url,
            "Started verse audio"
        );

        self.active = Some(ActiveClip { id, clip });
        self.current_chapter = Some(chapter.clone());
        self.chapter_verses = Some(chapter_verses.into());
        self.set_verse(Some(verse_number));
        self.set_state(PlaybackState::Loading);
    }

    /// Pause when playing, resume when paused.
    ///
    /// Only asks the clip; the state follows once the clip confirms.
    pub fn toggle_play_pause(&mut self) {
        if self.current_verse_number.is_none() {
            return;
        }
        let Some(active) = self.active.as_mut() else {
            return;
        };

        match self.state {
            PlaybackState::Playing | PlaybackState::Loading => active.clip.pause(),
            PlaybackState::Paused => {
                if let Err(e) = active.clip.play() {
                    warn!(clip = %active.id, error = %e, "Could not resume verse audio");
                }
            }
            PlaybackState::Idle => {}
        }
    }

    /// Stop playback and release the clip. No-op when nothing is loaded.
    pub fn stop(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        debug!(clip = %active.id, "Stopping playback");
        active.halt();
        self.clear();
    }

    /// Flip autoplay; applies from the next verse completion on.
    ///
    /// Returns the new setting.
    pub fn toggle_autoplay(&mut self) -> bool {
        self.autoplay = !self.autoplay;
        self.pending_events.push(PlaybackEvent::AutoplayChanged {
            enabled: self.autoplay,
        });
        self.autoplay
    }

    /// Tear down at the end of the session
    pub fn shutdown(&mut self) {
        self.stop();
        self.pending_events.clear();
    }

    // ===== Clip notifications =====

    /// Apply every queued clip notification.
    ///
    /// Returns how many notifications were processed (including ignored
    /// stale ones).
    pub fn pump(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(notification) = self.inbox_rx.try_recv() {
            self.handle_clip_event(notification.clip_id, notification.event);
            processed += 1;
        }
        processed
    }

    /// Apply a single notification from clip `id`
    pub fn handle_clip_event(&mut self, id: ClipId, event: ClipEvent) {
        if self.active.as_ref().map(|a| a.id) != Some(id) {
            debug!(clip = %id, event = ?event, "Ignoring notification from inactive clip");
            return;
        }

        match event {
            ClipEvent::Playing => self.set_state(PlaybackState::Playing),
            ClipEvent::Paused => self.set_state(PlaybackState::Paused),
            ClipEvent::Ended => self.handle_clip_ended(),
            ClipEvent::Failed(message) => {
                warn!(clip = %id, error = %message, "Verse audio failed");
                if let Some(active) = self.active.take() {
                    active.halt();
                }
                self.fail(message);
            }
        }
    }

    /// Autoplay: move on to the next verse of the chapter snapshot, or stop
    fn handle_clip_ended(&mut self) {
        // Already finished, so no pause needed
        self.active = None;

        let next = if self.autoplay {
            self.next_verse()
        } else {
            None
        };

        let (Some(next), Some(chapter), Some(verses)) = (
            next,
            self.current_chapter.clone(),
            self.chapter_verses.clone(),
        ) else {
            debug!("Recitation finished");
            self.clear();
            return;
        };

        match next.audio_url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => {
                debug!(
                    chapter = chapter.number,
                    verse = next.number_in_chapter,
                    "Autoplaying next verse"
                );
                self.play(url, next.number_in_chapter, &chapter, verses);
            }
            None => {
                debug!(
                    verse = next.number_in_chapter,
                    "Next verse has no audio, ending recitation"
                );
                self.clear();
            }
        }
    }

    /// Verse after the current one in the snapshot
    fn next_verse(&self) -> Option<Verse> {
        let verses = self.chapter_verses.as_ref()?;
        let current = self.current_verse_number?;
        let index = verses
            .iter()
            .position(|v| v.number_in_chapter == current)?;
        verses.get(index + 1).cloned()
    }

    // ===== State Queries =====

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_autoplay_enabled(&self) -> bool {
        self.autoplay
    }

    /// `number_in_chapter` of the loaded verse
    pub fn current_verse_number(&self) -> Option<u32> {
        self.current_verse_number
    }

    pub fn current_chapter(&self) -> Option<&Chapter> {
        self.current_chapter.as_ref()
    }

    /// Verse list snapshot used for autoplay
    pub fn chapter_verses(&self) -> Option<&[Verse]> {
        self.chapter_verses.as_deref()
    }

    /// Id of the clip currently owned, if any
    pub fn active_clip_id(&self) -> Option<ClipId> {
        self.active.as_ref().map(|a| a.id)
    }

    /// Whether `verse_number` of `chapter_number` is the loaded verse
    pub fn is_current(&self, chapter_number: u32, verse_number: u32) -> bool {
        self.current_chapter.as_ref().map(|c| c.number) == Some(chapter_number)
            && self.current_verse_number == Some(verse_number)
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            state: self.state,
            verse_number: self.current_verse_number,
            chapter: self.current_chapter.clone(),
            is_playing: self.is_playing(),
            is_autoplay_enabled: self.autoplay,
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events emitted since the last drain. UI surfaces call
    /// this after each interaction or pump to re-render.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    fn active_pair(&self) -> Option<(u32, u32)> {
        self.active.as_ref()?;
        Some((self.current_chapter.as_ref()?.number, self.current_verse_number?))
    }

    fn allocate_clip_id(&mut self) -> ClipId {
        let id = ClipId::new(self.next_clip_id);
        self.next_clip_id += 1;
        id
    }

    /// Forget the loaded verse; the clip must already be released
    fn clear(&mut self) {
        self.active = None;
        self.current_chapter = None;
        self.chapter_verses = None;
        self.set_verse(None);
        self.set_state(PlaybackState::Idle);
    }

    fn fail(&mut self, message: String) {
        self.clear();
        self.pending_events
            .push(PlaybackEvent::PlaybackFailed { message });
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.pending_events.push(PlaybackEvent::StateChanged { state });
        }
    }

    fn set_verse(&mut self, verse_number: Option<u32>) {
        self.current_verse_number = verse_number;
        self.pending_events.push(PlaybackEvent::VerseChanged {
            chapter_number: self.current_chapter.as_ref().map(|c| c.number),
            verse_number,
        });
    }
}

impl Drop for AudioCoordinator {
    fn drop(&mut self) {
        if let Some(active) = self.active.take() {
            active.halt();
        }
    }
}
