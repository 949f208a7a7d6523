//! Platform-agnostic audio clip traits
//!
//! Abstracts the platform's playback primitive (an `HtmlAudioElement` in the
//! browser, a decoder + output stream elsewhere). A clip is one playable
//! recording of one verse. Clips never report back synchronously: their
//! play/pause/ended/error notifications go through a [`ClipNotifier`] and
//! are applied by the coordinator later.

use crate::error::Result;
use crossbeam_channel::Sender;
use std::fmt;

/// Identity of a clip, unique per coordinator.
///
/// Notifications carry the id of the clip that produced them, so handlers
/// can drop anything coming from a clip that is no longer active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClipId(u64);

impl ClipId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clip#{}", self.0)
    }
}

/// Resource-level notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipEvent {
    /// Playback actually started or resumed
    Playing,

    /// Playback paused
    Paused,

    /// Reached the end of the recording
    Ended,

    /// Network or decoding failure
    Failed(String),
}

/// A notification tagged with the clip that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipNotification {
    pub clip_id: ClipId,
    pub event: ClipEvent,
}

/// Handle a clip uses to report its events back to the coordinator
#[derive(Debug, Clone)]
pub struct ClipNotifier {
    clip_id: ClipId,
    tx: Sender<ClipNotification>,
}

impl ClipNotifier {
    pub(crate) fn new(clip_id: ClipId, tx: Sender<ClipNotification>) -> Self {
        Self { clip_id, tx }
    }

    pub fn clip_id(&self) -> ClipId {
        self.clip_id
    }

    /// Queue an event for the coordinator.
    ///
    /// Silently dropped once the coordinator is gone.
    pub fn notify(&self, event: ClipEvent) {
        let _ = self.tx.send(ClipNotification {
            clip_id: self.clip_id,
            event,
        });
    }
}

/// One playable recording.
///
/// Dropping the box releases the underlying resource.
pub trait AudioClip {
    /// Ask the clip to start or resume.
    ///
    /// `Ok` only means the request was accepted; the clip confirms with
    /// [`ClipEvent::Playing`] or reports [`ClipEvent::Failed`] later.
    fn play(&mut self) -> Result<()>;

    /// Pause; the clip confirms with [`ClipEvent::Paused`]
    fn pause(&mut self);

    /// Move the playback position back to the start
    fn rewind(&mut self);
}

/// Factory for clips
pub trait AudioBackend {
    /// Create a clip for `url` and register its observers on `notifier`
    fn load(&mut self, url: &str, notifier: ClipNotifier) -> Result<Box<dyn AudioClip>>;
}
