//! PulseAudio audio control through `pactl`.

use remotectl_config::AudioDriver;

use super::errors::BackendError;
use super::runner::CommandRunner;
use super::volume::VolumeLevel;
use super::AudioBackend;

const PROGRAM: &str = AudioDriver::Pactl.program();
const DEFAULT_SINK: &str = "@DEFAULT_SINK@";

/// Audio backend for PulseAudio hosts, including `pipewire-pulse`.
#[derive(Debug)]
pub struct PactlAudio<R> {
    runner: R,
    sink: String,
}

impl<R: CommandRunner> PactlAudio<R> {
    /// Controls the default sink.
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            sink: DEFAULT_SINK.to_owned(),
        }
    }

    fn set_mute(&self, muted: bool) -> Result<(), BackendError> {
        let flag = if muted { "1" } else { "0" };
        self.runner
            .run(PROGRAM, &["set-sink-mute", self.sink.as_str(), flag])
            .map(drop)
    }
}

impl<R: CommandRunner> AudioBackend for PactlAudio<R> {
    fn volume(&self) -> Result<VolumeLevel, BackendError> {
        let output = self
            .runner
            .run(PROGRAM, &["get-sink-volume", self.sink.as_str()])?;
        parse_sink_volume(&output).ok_or_else(|| BackendError::unexpected_output(PROGRAM, output))
    }

    fn set_volume(&self, level: VolumeLevel) -> Result<(), BackendError> {
        let percent = level.to_string();
        self.runner
            .run(
                PROGRAM,
                &["set-sink-volume", self.sink.as_str(), percent.as_str()],
            )
            .map(drop)
    }

    fn mute(&self) -> Result<(), BackendError> {
        self.set_mute(true)
    }

    fn unmute(&self) -> Result<(), BackendError> {
        self.set_mute(false)
    }

    fn is_muted(&self) -> Result<bool, BackendError> {
        let output = self
            .runner
            .run(PROGRAM, &["get-sink-mute", self.sink.as_str()])?;
        parse_sink_mute(&output).ok_or_else(|| BackendError::unexpected_output(PROGRAM, output))
    }
}

/// Takes the first channel's percentage from `get-sink-volume` output, e.g.
/// `Volume: front-left: 32768 /  50% / -18.06 dB, ...`.
fn parse_sink_volume(output: &str) -> Option<VolumeLevel> {
    output
        .split_whitespace()
        .find_map(|word| word.strip_suffix('%'))
        .and_then(|digits| digits.parse::<u32>().ok())
        .map(VolumeLevel::from_percent)
}

/// Parses `Mute: yes` or `Mute: no`.
fn parse_sink_mute(output: &str) -> Option<bool> {
    match output.trim().strip_prefix("Mute:")?.trim() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}
