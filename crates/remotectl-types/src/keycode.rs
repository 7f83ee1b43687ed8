use std::fmt;

/// Key codes intercepted for audio and media handling.
///
/// Codes start at 1001 so they never overlap a single-byte raw key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedKey {
    /// Raise the output volume by one step.
    VolumeUp,
    /// Lower the output volume by one step.
    VolumeDown,
    /// Mute the output.
    Mute,
    /// Unmute the output.
    Unmute,
    /// Flip the output mute state.
    ToggleMute,
    /// Skip to the next media track.
    MediaNext,
    /// Return to the previous media track.
    MediaPrevious,
    /// Pause media playback.
    MediaPause,
    /// Resume media playback.
    MediaPlay,
    /// Toggle media playback.
    MediaTogglePlay,
}

impl ReservedKey {
    /// Every reserved key, in code order.
    pub const ALL: [Self; 10] = [
        Self::VolumeUp,
        Self::VolumeDown,
        Self::Mute,
        Self::Unmute,
        Self::ToggleMute,
        Self::MediaNext,
        Self::MediaPrevious,
        Self::MediaPause,
        Self::MediaPlay,
        Self::MediaTogglePlay,
    ];

    /// Returns the wire code for this key.
    #[must_use]
    pub const fn code(self) -> u64 {
        match self {
            Self::VolumeUp => 1001,
            Self::VolumeDown => 1002,
            Self::Mute => 1003,
            Self::Unmute => 1004,
            Self::ToggleMute => 1005,
            Self::MediaNext => 1006,
            Self::MediaPrevious => 1007,
            Self::MediaPause => 1008,
            Self::MediaPlay => 1009,
            Self::MediaTogglePlay => 1010,
        }
    }

    /// Looks up the reserved key for a wire code.
    #[must_use]
    pub const fn from_code(code: u64) -> Option<Self> {
        match code {
            1001 => Some(Self::VolumeUp),
            1002 => Some(Self::VolumeDown),
            1003 => Some(Self::Mute),
            1004 => Some(Self::Unmute),
            1005 => Some(Self::ToggleMute),
            1006 => Some(Self::MediaNext),
            1007 => Some(Self::MediaPrevious),
            1008 => Some(Self::MediaPause),
            1009 => Some(Self::MediaPlay),
            1010 => Some(Self::MediaTogglePlay),
            _ => None,
        }
    }

    /// Returns the canonical kebab-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VolumeUp => "volume-up",
            Self::VolumeDown => "volume-down",
            Self::Mute => "mute",
            Self::Unmute => "unmute",
            Self::ToggleMute => "toggle-mute",
            Self::MediaNext => "media-next",
            Self::MediaPrevious => "media-previous",
            Self::MediaPause => "media-pause",
            Self::MediaPlay => "media-play",
            Self::MediaTogglePlay => "media-toggle-play",
        }
    }
}

impl fmt::Display for ReservedKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
