//! Test doubles shared by the daemon suites.

use std::collections::HashSet;
use std::ffi::OsString;
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex, MutexGuard};

use ortho_config::OrthoError;

use remotectl_config::{AudioDriver, Config, InputDriver, ListenEndpoint};

use crate::backends::{
    AudioBackend, BackendError, BackendProvider, Backends, InputBackend, VolumeLevel,
};
use crate::bootstrap::{BootstrapError, ConfigLoader, Daemon, bootstrap_with};
use crate::dispatch::Dispatcher;
use crate::health::HealthReporter;
use crate::transport::ServeError;

/// Audio operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioOp {
    Volume,
    SetVolume,
    Mute,
    Unmute,
    IsMuted,
}

/// Audio calls observed by [`FakeAudio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCall {
    Volume,
    SetVolume(u8),
    Mute,
    Unmute,
    IsMuted,
}

#[derive(Default)]
struct AudioState {
    level: VolumeLevel,
    muted: bool,
    failing: HashSet<AudioOp>,
    calls: Vec<AudioCall>,
}

/// In-memory sink with scripted failures.
#[derive(Clone, Default)]
pub struct FakeAudio {
    state: Arc<Mutex<AudioState>>,
}

impl FakeAudio {
    /// Builds a sink at the given level.
    pub fn at(level: u8) -> Self {
        let audio = Self::default();
        audio.set_level(level);
        audio
    }

    pub fn set_level(&self, level: u8) {
        self.lock().level = VolumeLevel::new(level);
    }

    pub fn set_muted(&self, muted: bool) {
        self.lock().muted = muted;
    }

    pub fn fail_on(&self, op: AudioOp) {
        self.lock().failing.insert(op);
    }

    pub fn level(&self) -> u8 {
        self.lock().level.percent()
    }

    pub fn muted(&self) -> bool {
        self.lock().muted
    }

    pub fn calls(&self) -> Vec<AudioCall> {
        self.lock().calls.clone()
    }

    /// Calls other than the initial volume read.
    pub fn mutations(&self) -> Vec<AudioCall> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, AudioCall::Volume | AudioCall::IsMuted))
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, AudioState> {
        self.state.lock().expect("audio state mutex poisoned")
    }

    fn record(
        &self,
        op: AudioOp,
        call: AudioCall,
    ) -> Result<MutexGuard<'_, AudioState>, BackendError> {
        let mut state = self.lock();
        state.calls.push(call);
        if state.failing.contains(&op) {
            let detail = format!("{op:?} failed");
            return Err(BackendError::unexpected_output("fake-audio", detail));
        }
        Ok(state)
    }
}

impl AudioBackend for FakeAudio {
    fn volume(&self) -> Result<VolumeLevel, BackendError> {
        self.record(AudioOp::Volume, AudioCall::Volume)
            .map(|state| state.level)
    }

    fn set_volume(&self, level: VolumeLevel) -> Result<(), BackendError> {
        let call = AudioCall::SetVolume(level.percent());
        let mut state = self.record(AudioOp::SetVolume, call)?;
        state.level = level;
        Ok(())
    }

    fn mute(&self) -> Result<(), BackendError> {
        self.record(AudioOp::Mute, AudioCall::Mute)?.muted = true;
        Ok(())
    }

    fn unmute(&self) -> Result<(), BackendError> {
        self.record(AudioOp::Unmute, AudioCall::Unmute)?.muted = false;
        Ok(())
    }

    fn is_muted(&self) -> Result<bool, BackendError> {
        self.record(AudioOp::IsMuted, AudioCall::IsMuted)
            .map(|state| state.muted)
    }
}

/// Key events observed by [`FakeInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCall {
    Tap(char),
    Down(char),
    Up(char),
}

#[derive(Default)]
struct InputState {
    failing: bool,
    calls: Vec<InputCall>,
}

/// Input backend that records events and can be made to fail.
#[derive(Clone, Default)]
pub struct FakeInput {
    state: Arc<Mutex<InputState>>,
}

impl FakeInput {
    pub fn fail_all(&self) {
        self.state.lock().expect("input state mutex poisoned").failing = true;
    }

    pub fn calls(&self) -> Vec<InputCall> {
        self.state
            .lock()
            .expect("input state mutex poisoned")
            .calls
            .clone()
    }

    fn record(&self, call: InputCall) -> Result<(), BackendError> {
        let mut state = self.state.lock().expect("input state mutex poisoned");
        state.calls.push(call);
        if state.failing {
            return Err(BackendError::unexpected_output("fake-input", "no display"));
        }
        Ok(())
    }
}

impl InputBackend for FakeInput {
    fn key_tap(&self, key: char) -> Result<(), BackendError> {
        self.record(InputCall::Tap(key))
    }

    fn key_down(&self, key: char) -> Result<(), BackendError> {
        self.record(InputCall::Down(key))
    }

    fn key_up(&self, key: char) -> Result<(), BackendError> {
        self.record(InputCall::Up(key))
    }
}

/// Builds a dispatcher over the two fakes.
pub fn fake_dispatcher(audio: &FakeAudio, input: &FakeInput) -> Dispatcher {
    Dispatcher::new(Arc::new(audio.clone()), Arc::new(input.clone()))
}

/// Provider that hands out shared fakes and records the requested drivers.
#[derive(Clone, Default)]
pub struct RecordingBackendProvider {
    pub audio: FakeAudio,
    pub input: FakeInput,
    requests: Arc<Mutex<Vec<(AudioDriver, InputDriver)>>>,
}

impl RecordingBackendProvider {
    /// Returns the drivers named in each configuration seen.
    pub fn requests(&self) -> Vec<(AudioDriver, InputDriver)> {
        self.requests
            .lock()
            .expect("provider mutex poisoned")
            .clone()
    }
}

impl BackendProvider for RecordingBackendProvider {
    fn backends(&self, config: &Config) -> Backends {
        self.requests
            .lock()
            .expect("provider mutex poisoned")
            .push((config.audio_driver(), config.input_driver()));
        Backends::new(Arc::new(self.audio.clone()), Arc::new(self.input.clone()))
    }
}

/// Loader producing a loopback configuration.
pub struct TestConfigLoader {
    listen: ListenEndpoint,
}

impl TestConfigLoader {
    /// Listens on an ephemeral loopback port.
    #[must_use]
    pub fn new() -> Self {
        Self::listening_on(ListenEndpoint::new("127.0.0.1", 0))
    }

    #[must_use]
    pub fn listening_on(listen: ListenEndpoint) -> Self {
        Self { listen }
    }
}

impl ConfigLoader for TestConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Ok(Config {
            listen: self.listen.clone(),
            audio_driver: AudioDriver::Pactl,
            ..Config::default()
        })
    }
}

/// Loader that intentionally fails by passing an invalid listen endpoint.
pub struct FailingConfigLoader;

impl ConfigLoader for FailingConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        let args = vec![
            OsString::from("remotectld"),
            OsString::from("--listen"),
            OsString::from("no-port-here"),
        ];
        Config::load_from_iter(args)
    }
}

/// Records health events for assertions.
#[derive(Default)]
pub struct RecordingHealthReporter {
    events: Mutex<Vec<HealthEvent>>,
}

impl RecordingHealthReporter {
    /// Captures a copy of the recorded events.
    pub fn events(&self) -> Vec<HealthEvent> {
        self.events
            .lock()
            .expect("health reporter mutex poisoned")
            .clone()
    }

    fn record(&self, event: HealthEvent) {
        self.events
            .lock()
            .expect("health reporter mutex poisoned")
            .push(event);
    }
}

impl HealthReporter for RecordingHealthReporter {
    fn bootstrap_starting(&self) {
        self.record(HealthEvent::BootstrapStarting);
    }

    fn bootstrap_succeeded(&self, _config: &Config) {
        self.record(HealthEvent::BootstrapSucceeded);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        self.record(HealthEvent::BootstrapFailed(error.to_string()));
    }

    fn listener_bound(&self, address: SocketAddr) {
        self.record(HealthEvent::ListenerBound(address));
    }

    fn listener_failed(&self, error: &ServeError) {
        self.record(HealthEvent::ListenerFailed(error.to_string()));
    }

    fn listener_stopped(&self) {
        self.record(HealthEvent::ListenerStopped);
    }
}

/// Structured health events tracked during scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HealthEvent {
    BootstrapStarting,
    BootstrapSucceeded,
    BootstrapFailed(String),
    ListenerBound(SocketAddr),
    ListenerFailed(String),
    ListenerStopped,
}

/// Scenario world for the bootstrap suite.
pub struct TestWorld {
    loader: Box<dyn ConfigLoader>,
    pub reporter: Arc<RecordingHealthReporter>,
    pub provider: RecordingBackendProvider,
    daemon: Option<Daemon>,
    bootstrap_error: Option<BootstrapError>,
    serve_result: Option<Result<(), ServeError>>,
    occupied: Option<TcpListener>,
}

impl TestWorld {
    pub fn new() -> Self {
        Self {
            loader: Box::new(TestConfigLoader::new()),
            reporter: Arc::new(RecordingHealthReporter::default()),
            provider: RecordingBackendProvider::default(),
            daemon: None,
            bootstrap_error: None,
            serve_result: None,
            occupied: None,
        }
    }

    /// Binds a loopback port and points the loader at it.
    pub fn occupy_listen_endpoint(&mut self) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback port");
        let port = listener.local_addr().expect("local address").port();
        self.occupied = Some(listener);
        self.use_loader(Box::new(TestConfigLoader::listening_on(
            ListenEndpoint::new("127.0.0.1", port),
        )));
    }

    pub fn use_loader(&mut self, loader: Box<dyn ConfigLoader>) {
        self.loader = loader;
        self.daemon = None;
        self.bootstrap_error = None;
        self.serve_result = None;
    }

    /// Runs the bootstrap sequence once.
    pub fn bootstrap(&mut self) {
        if self.daemon.is_some() || self.bootstrap_error.is_some() {
            return;
        }
        match bootstrap_with(&*self.loader, self.reporter.clone(), &self.provider) {
            Ok(daemon) => self.daemon = Some(daemon),
            Err(error) => self.bootstrap_error = Some(error),
        }
    }

    /// Hands the daemon to the listener and records the outcome.
    pub fn serve(&mut self) {
        if let Some(daemon) = self.daemon.take() {
            self.serve_result = Some(daemon.serve());
        }
    }

    pub fn daemon(&self) -> Option<&Daemon> {
        self.daemon.as_ref()
    }

    pub fn bootstrap_error(&self) -> Option<&BootstrapError> {
        self.bootstrap_error.as_ref()
    }

    pub fn serve_result(&self) -> Option<&Result<(), ServeError>> {
        self.serve_result.as_ref()
    }
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}
