//! Centralized error types for dispatchdeck.

use thiserror::Error;

/// All errors produced at the mail-service boundary.
#[derive(Error, Debug)]
pub enum MailError {
    /// The collaborator has no backing mail source configured.
    #[error("Mail service unavailable: {0}")]
    Unavailable(String),

    /// A fetch attempt failed.
    #[error("Mail fetch failed: {reason}")]
    Fetch { reason: String },

    /// The user cancelled the operation.
    #[error("Operation cancelled by user")]
    Cancelled,
}

/// Convenience alias for `Result<T, MailError>`.
pub type Result<T> = std::result::Result<T, MailError>;

impl MailError {
    /// Create a `Fetch` variant from any reason string.
    pub fn fetch(reason: impl Into<String>) -> Self {
        Self::Fetch {
            reason: reason.into(),
        }
    }
}
