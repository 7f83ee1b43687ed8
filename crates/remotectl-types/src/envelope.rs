use serde::{Deserialize, Serialize};

/// JSON string returned with HTTP 202 once a command has been handled.
pub const ACCEPTED: &str = "Accepted";

/// Failure envelope returned for every rejected command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorBody {
    /// Raw diagnostic text from the failing operation.
    pub err: String,
    /// Human-readable description of the failure category.
    pub message: String,
}

impl ErrorBody {
    /// Builds an envelope from a diagnostic and a user-facing message.
    #[must_use]
    pub fn new(err: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            err: err.into(),
            message: message.into(),
        }
    }
}
