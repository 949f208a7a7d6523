//! Error types for playback coordination

use thiserror::Error;

/// Errors raised by audio backends.
///
/// These never leave the coordinator: a clip that cannot be created or
/// started collapses playback back to idle and is logged.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The platform could not create a clip for the URL
    #[error("Failed to load audio clip {url}: {reason}")]
    ClipLoad { url: String, reason: String },

    /// The clip exists but refused to start
    #[error("Failed to start audio clip: {0}")]
    ClipStart(String),

    /// Backend-specific failure
    #[error("Audio backend error: {0}")]
    Backend(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
