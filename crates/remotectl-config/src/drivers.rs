//! Host tool selection for the audio and input backends.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Program used to read and change the default output sink.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AudioDriver {
    /// PipeWire via `wpctl`.
    #[default]
    Wpctl,
    /// PulseAudio (or `pipewire-pulse`) via `pactl`.
    Pactl,
}

impl AudioDriver {
    /// Name of the executable the driver invokes.
    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::Wpctl => "wpctl",
            Self::Pactl => "pactl",
        }
    }
}

/// Program used to synthesise key events.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InputDriver {
    /// X11 via `xdotool`.
    #[default]
    Xdotool,
}

impl InputDriver {
    /// Name of the executable the driver invokes.
    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::Xdotool => "xdotool",
        }
    }
}
