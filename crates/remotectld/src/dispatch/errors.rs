//! Failure categories and the user-facing message catalog.
//!
//! Every rejected command maps to exactly one [`FailureKind`]. The kind fixes
//! the message shown to the user and the HTTP status; the [`Failure`] carries
//! the raw diagnostic from whichever call went wrong.

use std::fmt;

use remotectl_types::ErrorBody;
use thiserror::Error;

use crate::backends::BackendError;

/// Diagnostic reported for the media keys.
pub const NOT_IMPLEMENTED_DETAIL: &str = "feature not implemented yet";

/// Flat taxonomy of dispatch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The request body could not be decoded.
    BindError,
    /// Reading the current volume failed.
    GetVolume,
    /// Writing a new volume failed.
    SetVolume,
    /// Muting failed.
    Mute,
    /// Unmuting failed.
    Unmute,
    /// Reading the mute state failed.
    GetMuted,
    /// The mute or unmute call of a toggle failed.
    ToggleMute,
    /// The requested action is reserved but not built.
    NotImplemented,
    /// The server could not run the dispatch at all.
    Internal,
}

impl FailureKind {
    /// Returns the canonical category name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BindError => "bind-error",
            Self::GetVolume => "get-volume",
            Self::SetVolume => "set-volume",
            Self::Mute => "mute",
            Self::Unmute => "unmute",
            Self::GetMuted => "get-muted",
            Self::ToggleMute => "toggle-mute",
            Self::NotImplemented => "not-implemented",
            Self::Internal => "internal",
        }
    }

    /// Returns the human-readable message shown to callers.
    #[must_use]
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::BindError => "Failed binding JSON.",
            Self::GetVolume => "Failed getting current volume.",
            Self::SetVolume => "Failed setting volume.",
            Self::Mute => "Failed muting.",
            Self::Unmute => "Failed unmuting.",
            Self::GetMuted => "Failed getting muted state.",
            Self::ToggleMute => "Failed toggling mute.",
            Self::NotImplemented => "Feature not implemented yet.",
            Self::Internal => "Failed handling request.",
        }
    }

    /// Returns the HTTP status code for this category.
    ///
    /// Unbuilt features answer 501; everything else is a server-side failure
    /// and answers 500.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::NotImplemented => 501,
            Self::BindError
            | Self::GetVolume
            | Self::SetVolume
            | Self::Mute
            | Self::Unmute
            | Self::GetMuted
            | Self::ToggleMute
            | Self::Internal => 500,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A categorised dispatch failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {detail}")]
pub struct Failure {
    kind: FailureKind,
    detail: String,
}

impl Failure {
    /// Creates a failure from a category and a raw diagnostic.
    #[must_use]
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    /// Creates a failure from a backend error.
    #[must_use]
    pub fn backend(kind: FailureKind, error: &BackendError) -> Self {
        Self::new(kind, error.to_string())
    }

    /// Creates the failure returned for the media keys.
    #[must_use]
    pub fn not_implemented() -> Self {
        Self::new(FailureKind::NotImplemented, NOT_IMPLEMENTED_DETAIL)
    }

    /// Failure category.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Raw diagnostic text.
    #[must_use]
    pub fn detail(&self) -> &str {
        self.detail.as_str()
    }

    /// Catalog message for the category.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        self.kind.user_message()
    }

    /// HTTP status for the category.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.kind.http_status()
    }

    /// Builds the JSON envelope sent to the caller.
    #[must_use]
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody::new(self.detail.as_str(), self.user_message())
    }
}
