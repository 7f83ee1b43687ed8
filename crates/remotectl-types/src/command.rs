use serde::{Deserialize, Serialize};

use crate::ReservedKey;

/// One remote input event.
///
/// Missing fields decode to their zero values, so `{"key":1001}` is a valid
/// volume-up request. `pressed` and `tap` only matter for codes that are not
/// reserved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyCommand {
    /// Reserved action code or raw key code.
    pub key: u64,
    /// Key-down when `true`, key-up when `false`. Ignored when `tap` is set.
    pub pressed: bool,
    /// Press and release immediately.
    pub tap: bool,
}

impl KeyCommand {
    /// Builds a command for a reserved action.
    #[must_use]
    pub const fn reserved(key: ReservedKey) -> Self {
        Self {
            key: key.code(),
            pressed: false,
            tap: false,
        }
    }

    /// Builds a press-and-release command for a raw key code.
    #[must_use]
    pub const fn tap(key: u64) -> Self {
        Self {
            key,
            pressed: false,
            tap: true,
        }
    }

    /// Builds a key-down (`pressed`) or key-up command for a raw key code.
    #[must_use]
    pub const fn press(key: u64, pressed: bool) -> Self {
        Self {
            key,
            pressed,
            tap: false,
        }
    }

    /// Returns the reserved action this command targets, if any.
    #[must_use]
    pub const fn reserved_key(&self) -> Option<ReservedKey> {
        ReservedKey::from_code(self.key)
    }
}
