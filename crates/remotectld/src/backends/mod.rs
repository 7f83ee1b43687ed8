//! Host capabilities the dispatcher drives.
//!
//! The daemon talks to two collaborators: an [`AudioBackend`] that reads and
//! changes the default output sink, and an [`InputBackend`] that synthesises
//! key events. Both are blocking, single-attempt interfaces; callers decide
//! what to do with failures. The concrete implementations shell out to the
//! host tool selected in configuration through a [`CommandRunner`].

mod errors;
mod keysym;
mod pactl;
mod runner;
mod volume;
mod wpctl;
mod xdotool;

use std::sync::Arc;

use remotectl_config::{AudioDriver, Config, InputDriver};

pub use self::errors::BackendError;
pub use self::keysym::keysym_name;
pub use self::pactl::PactlAudio;
pub use self::runner::{CommandRunner, SystemCommandRunner};
pub use self::volume::VolumeLevel;
pub use self::wpctl::WpctlAudio;
pub use self::xdotool::XdotoolInput;

#[cfg(test)]
pub(crate) use self::runner::test_support::ScriptedRunner;

pub(crate) const BACKEND_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::backends");

/// Volume and mute control for the default output sink.
pub trait AudioBackend: Send + Sync {
    /// Reads the current volume level.
    fn volume(&self) -> Result<VolumeLevel, BackendError>;

    /// Sets the volume level.
    fn set_volume(&self, level: VolumeLevel) -> Result<(), BackendError>;

    /// Mutes the sink.
    fn mute(&self) -> Result<(), BackendError>;

    /// Unmutes the sink.
    fn unmute(&self) -> Result<(), BackendError>;

    /// Reports whether the sink is muted.
    fn is_muted(&self) -> Result<bool, BackendError>;
}

/// Raw key event synthesis.
pub trait InputBackend: Send + Sync {
    /// Presses and immediately releases `key`.
    fn key_tap(&self, key: char) -> Result<(), BackendError>;

    /// Presses `key` without releasing it.
    fn key_down(&self, key: char) -> Result<(), BackendError>;

    /// Releases a previously pressed `key`.
    fn key_up(&self, key: char) -> Result<(), BackendError>;
}

/// Shared handles to the audio and input collaborators.
#[derive(Clone)]
pub struct Backends {
    /// Audio collaborator.
    pub audio: Arc<dyn AudioBackend>,
    /// Input collaborator.
    pub input: Arc<dyn InputBackend>,
}

impl Backends {
    /// Bundles the two collaborators.
    #[must_use]
    pub fn new(audio: Arc<dyn AudioBackend>, input: Arc<dyn InputBackend>) -> Self {
        Self { audio, input }
    }
}

/// Builds the collaborators for a resolved configuration.
pub trait BackendProvider {
    /// Creates the audio and input backends named in `config`.
    fn backends(&self, config: &Config) -> Backends;
}

/// Provider that drives the host tools selected in configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBackendProvider;

impl BackendProvider for SystemBackendProvider {
    fn backends(&self, config: &Config) -> Backends {
        let audio: Arc<dyn AudioBackend> = match config.audio_driver() {
            AudioDriver::Wpctl => Arc::new(WpctlAudio::new(SystemCommandRunner)),
            AudioDriver::Pactl => Arc::new(PactlAudio::new(SystemCommandRunner)),
        };
        let input: Arc<dyn InputBackend> = match config.input_driver() {
            InputDriver::Xdotool => Arc::new(XdotoolInput::new(SystemCommandRunner)),
        };
        tracing::debug!(
            target: BACKEND_TARGET,
            audio = config.audio_driver().program(),
            input = config.input_driver().program(),
            "backends configured"
        );
        Backends::new(audio, input)
    }
}
