//! PipeWire audio control through `wpctl`.

use remotectl_config::AudioDriver;

use super::errors::BackendError;
use super::runner::CommandRunner;
use super::volume::VolumeLevel;
use super::AudioBackend;

const PROGRAM: &str = AudioDriver::Wpctl.program();
const DEFAULT_SINK: &str = "@DEFAULT_AUDIO_SINK@";

/// Sink state reported by `wpctl get-volume`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SinkState {
    level: VolumeLevel,
    muted: bool,
}

/// Audio backend for PipeWire hosts.
#[derive(Debug)]
pub struct WpctlAudio<R> {
    runner: R,
    sink: String,
}

impl<R: CommandRunner> WpctlAudio<R> {
    /// Controls the default audio sink.
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            sink: DEFAULT_SINK.to_owned(),
        }
    }

    fn sink_state(&self) -> Result<SinkState, BackendError> {
        let output = self.runner.run(PROGRAM, &["get-volume", self.sink.as_str()])?;
        parse_get_volume(&output).ok_or_else(|| BackendError::unexpected_output(PROGRAM, output))
    }

    fn set_mute(&self, muted: bool) -> Result<(), BackendError> {
        let flag = if muted { "1" } else { "0" };
        self.runner
            .run(PROGRAM, &["set-mute", self.sink.as_str(), flag])
            .map(drop)
    }
}

impl<R: CommandRunner> AudioBackend for WpctlAudio<R> {
    fn volume(&self) -> Result<VolumeLevel, BackendError> {
        self.sink_state().map(|state| state.level)
    }

    fn set_volume(&self, level: VolumeLevel) -> Result<(), BackendError> {
        let percent = level.to_string();
        self.runner
            .run(PROGRAM, &["set-volume", self.sink.as_str(), percent.as_str()])
            .map(drop)
    }

    fn mute(&self) -> Result<(), BackendError> {
        self.set_mute(true)
    }

    fn unmute(&self) -> Result<(), BackendError> {
        self.set_mute(false)
    }

    fn is_muted(&self) -> Result<bool, BackendError> {
        self.sink_state().map(|state| state.muted)
    }
}

/// Parses `Volume: 0.45` or `Volume: 0.45 [MUTED]`.
fn parse_get_volume(output: &str) -> Option<SinkState> {
    let mut words = output.split_whitespace();
    if words.next()? != "Volume:" {
        return None;
    }
    let percent = parse_scalar_percent(words.next()?)?;
    let muted = words.any(|word| word == "[MUTED]");
    Some(SinkState {
        level: VolumeLevel::from_percent(percent),
        muted,
    })
}

/// Converts a decimal scalar such as `0.455` into a rounded percentage.
fn parse_scalar_percent(text: &str) -> Option<u32> {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    let whole: u32 = whole.parse().ok()?;
    if !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    let mut digits = fraction.bytes().map(|byte| u32::from(byte - b'0'));
    let tenths = digits.next().unwrap_or(0);
    let hundredths = digits.next().unwrap_or(0);
    let round_up = digits.next().is_some_and(|thousandths| thousandths >= 5);

    let percent = whole
        .checked_mul(100)?
        .checked_add(tenths * 10 + hundredths)?;
    Some(if round_up { percent.saturating_add(1) } else { percent })
}
