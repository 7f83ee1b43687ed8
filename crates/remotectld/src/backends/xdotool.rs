//! X11 key synthesis through `xdotool`.

use remotectl_config::InputDriver;

use super::errors::BackendError;
use super::keysym::keysym_name;
use super::runner::CommandRunner;
use super::InputBackend;

const PROGRAM: &str = InputDriver::Xdotool.program();

/// Input backend for X11 sessions.
#[derive(Debug)]
pub struct XdotoolInput<R> {
    runner: R,
}

impl<R: CommandRunner> XdotoolInput<R> {
    /// Sends events to the focused window.
    pub const fn new(runner: R) -> Self {
        Self { runner }
    }

    fn send(&self, action: &str, key: char) -> Result<(), BackendError> {
        let keysym = keysym_name(key);
        self.runner
            .run(PROGRAM, &[action, "--clearmodifiers", keysym.as_ref()])
            .map(drop)
    }
}

impl<R: CommandRunner> InputBackend for XdotoolInput<R> {
    fn key_tap(&self, key: char) -> Result<(), BackendError> {
        self.send("key", key)
    }

    fn key_down(&self, key: char) -> Result<(), BackendError> {
        self.send("keydown", key)
    }

    fn key_up(&self, key: char) -> Result<(), BackendError> {
        self.send("keyup", key)
    }
}
