//! Remote control daemon.
//!
//! `remotectld` accepts key commands over HTTP and turns them into local
//! actions. Reserved codes adjust the default audio sink (volume steps, mute,
//! unmute, toggle); media codes are recognised but not yet supported; every
//! other code is simulated as a keyboard event.
//!
//! Startup follows a fixed sequence: configuration is resolved through
//! [`remotectl_config`], structured telemetry is installed, the configured
//! audio and input backends are built, and the HTTP listener is bound. Each
//! stage reports to a [`HealthReporter`] so operators can see where a failed
//! start stopped.

mod backends;
mod bootstrap;
mod dispatch;
mod health;
mod process;
pub mod telemetry;
mod transport;

pub use backends::{
    AudioBackend, BackendError, BackendProvider, Backends, CommandRunner, InputBackend,
    PactlAudio, SystemBackendProvider, SystemCommandRunner, VolumeLevel, WpctlAudio,
    XdotoolInput, keysym_name,
};
pub use bootstrap::{
    BootstrapError, ConfigLoader, Daemon, StaticConfigLoader, SystemConfigLoader, bootstrap_with,
};
pub use dispatch::{Dispatcher, Failure, FailureKind, NOT_IMPLEMENTED_DETAIL, VOLUME_STEP};
pub use health::{HealthReporter, StructuredHealthReporter};
pub use process::{LaunchError, run_daemon};
pub use telemetry::{TelemetryError, TelemetryHandle};
pub use transport::{ServeError, serve};

#[cfg(test)]
mod tests;
