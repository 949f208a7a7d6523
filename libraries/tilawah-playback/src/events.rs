//! Playback Events
//!
//! Event-based communication for UI synchronization. The per-verse play
//! buttons and the mini-player drain these to re-render; they never hold
//! playback state of their own.

use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};

/// Events emitted by the audio coordinator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playback state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// The loaded verse changed (both `None` when playback cleared)
    VerseChanged {
        chapter_number: Option<u32>,
        verse_number: Option<u32>,
    },

    /// Autoplay preference flipped
    AutoplayChanged {
        enabled: bool,
    },

    /// A clip failed to load or start; playback went back to idle
    PlaybackFailed {
        /// Diagnostic message
        message: String,
    },
}
