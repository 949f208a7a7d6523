/// Core error types for Tilawah
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Tilawah
#[derive(Error, Debug)]
pub enum CoreError {
    /// No authenticated session; callers redirect to login
    #[error("No active session")]
    NoSession,

    /// A progress entry was submitted before choosing a chapter
    #[error("No chapter selected")]
    NoChapterSelected,

    /// Chapter number outside the corpus
    #[error("Invalid chapter number: {0} (expected 1-114)")]
    InvalidChapter(u32),

    /// Chapter not present in the supplied chapter list
    #[error("Chapter not found: {0}")]
    ChapterNotFound(u32),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
