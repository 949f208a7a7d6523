//! Core types for playback coordination

use serde::{Deserialize, Serialize};
use tilawah_core::Chapter;

/// Playback state
///
/// `Idle → Loading → Playing ⇄ Paused → (ended) → Idle | Loading`.
/// Any state returns to `Idle` on stop or on a load failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No clip loaded
    #[default]
    Idle,

    /// Clip created and asked to play, waiting for it to confirm
    Loading,

    /// The clip reported that it is playing
    Playing,

    /// The clip reported that it paused
    Paused,
}

impl PlaybackState {
    pub fn is_idle(self) -> bool {
        self == PlaybackState::Idle
    }
}

/// Configuration for the audio coordinator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Advance to the next verse when one finishes (default: true)
    pub autoplay: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { autoplay: true }
    }
}

/// Read-only view of the coordinator for UI surfaces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub state: PlaybackState,
    pub verse_number: Option<u32>,
    pub chapter: Option<Chapter>,
    pub is_playing: bool,
    pub is_autoplay_enabled: bool,
}
