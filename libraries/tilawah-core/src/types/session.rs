//! Session handed over by the identity provider

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// What the identity provider hands over: a user or nothing
pub type SessionState = Option<UserSession>;

/// The signed-in user, as far as the dashboard cares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub display_name: String,
    pub email: String,
}

impl UserSession {
    pub fn new(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
        }
    }

    /// First word of the display name, used in the greeting
    pub fn first_name(&self) -> &str {
        self.display_name.split_whitespace().next().unwrap_or("")
    }

    /// Uppercased first letter for the avatar bubble.
    ///
    /// Falls back to the email when the display name is blank.
    pub fn avatar_initial(&self) -> Option<char> {
        self.display_name
            .trim()
            .chars()
            .next()
            .or_else(|| self.email.trim().chars().next())
            .and_then(|c| c.to_uppercase().next())
    }

    /// Whether there is anything to identify the user by
    pub fn is_blank(&self) -> bool {
        self.display_name.trim().is_empty() && self.email.trim().is_empty()
    }
}

/// Gate for pages that need a signed-in user.
///
/// `CoreError::NoSession` means "redirect to login".
pub fn require_session(session: Option<&UserSession>) -> Result<&UserSession> {
    match session {
        Some(session) if !session.is_blank() => Ok(session),
        _ => Err(CoreError::NoSession),
    }
}
