//! Classification and execution of key commands.
//!
//! Every command starts with a read of the current volume. The reading is
//! only consumed by the volume keys, but a failed read rejects the command
//! regardless of which branch it would have taken.

use std::sync::Arc;

use remotectl_types::{KeyCommand, ReservedKey};
use tracing::debug;

use super::errors::{Failure, FailureKind};
use crate::backends::{AudioBackend, Backends, BackendError, InputBackend, VolumeLevel};

/// Tracing target for dispatch operations.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Percentage points moved by one volume key press.
pub const VOLUME_STEP: u8 = 5;

/// Translates key commands into audio or input actions.
#[derive(Clone)]
pub struct Dispatcher {
    audio: Arc<dyn AudioBackend>,
    input: Arc<dyn InputBackend>,
}

impl Dispatcher {
    /// Creates a dispatcher over the given collaborators.
    #[must_use]
    pub fn new(audio: Arc<dyn AudioBackend>, input: Arc<dyn InputBackend>) -> Self {
        Self { audio, input }
    }

    /// Creates a dispatcher from a bundled pair of collaborators.
    #[must_use]
    pub fn from_backends(backends: Backends) -> Self {
        Self::new(backends.audio, backends.input)
    }

    /// Executes a single command.
    ///
    /// # Errors
    ///
    /// Returns a [`Failure`] naming the audio call that failed, or a
    /// not-implemented failure for the media keys. Key simulation errors are
    /// logged and never surface.
    pub fn dispatch(&self, command: &KeyCommand) -> Result<(), Failure> {
        let current = self
            .audio
            .volume()
            .map_err(|error| Failure::backend(FailureKind::GetVolume, &error))?;

        match command.reserved_key() {
            Some(ReservedKey::VolumeUp) => self.set_volume(current.raised(VOLUME_STEP)),
            Some(ReservedKey::VolumeDown) => self.set_volume(current.lowered(VOLUME_STEP)),
            Some(ReservedKey::Mute) => self
                .audio
                .mute()
                .map_err(|error| Failure::backend(FailureKind::Mute, &error)),
            Some(ReservedKey::Unmute) => self
                .audio
                .unmute()
                .map_err(|error| Failure::backend(FailureKind::Unmute, &error)),
            Some(ReservedKey::ToggleMute) => self.toggle_mute(),
            Some(
                key @ (ReservedKey::MediaNext
                | ReservedKey::MediaPrevious
                | ReservedKey::MediaPause
                | ReservedKey::MediaPlay
                | ReservedKey::MediaTogglePlay),
            ) => {
                debug!(target: DISPATCH_TARGET, key = %key, "media key not implemented");
                Err(Failure::not_implemented())
            }
            None => {
                self.simulate_key(command);
                Ok(())
            }
        }
    }

    fn set_volume(&self, level: VolumeLevel) -> Result<(), Failure> {
        debug!(target: DISPATCH_TARGET, %level, "setting volume");
        self.audio
            .set_volume(level)
            .map_err(|error| Failure::backend(FailureKind::SetVolume, &error))
    }

    fn toggle_mute(&self) -> Result<(), Failure> {
        let muted = self
            .audio
            .is_muted()
            .map_err(|error| Failure::backend(FailureKind::GetMuted, &error))?;
        let result = if muted {
            self.audio.unmute()
        } else {
            self.audio.mute()
        };
        result.map_err(|error| Failure::backend(FailureKind::ToggleMute, &error))
    }

    fn simulate_key(&self, command: &KeyCommand) {
        let key = key_char(command.key);
        let result = if command.tap {
            self.input.key_tap(key)
        } else if command.pressed {
            self.input.key_down(key)
        } else {
            self.input.key_up(key)
        };
        if let Err(error) = result {
            log_input_failure(command, &error);
        }
    }
}

fn log_input_failure(command: &KeyCommand, error: &BackendError) {
    debug!(
        target: DISPATCH_TARGET,
        key = command.key,
        pressed = command.pressed,
        tap = command.tap,
        %error,
        "key simulation failed"
    );
}

/// Interprets the low byte of a key code as a character.
fn key_char(code: u64) -> char {
    char::from(u8::try_from(code & 0xFF).unwrap_or(u8::MAX))
}
