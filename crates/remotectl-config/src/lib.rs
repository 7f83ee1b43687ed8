//! Shared configuration for the remote control daemon.
//!
//! [`Config`] is resolved by `ortho_config`, layering built-in defaults, an
//! optional TOML file (`--config-path` or `REMOTECTL_CONFIG_PATH`),
//! `REMOTECTL_*` environment variables, and command-line flags. Later sources
//! win.

mod defaults;
mod drivers;
mod listen;
mod logging;

use std::ffi::OsString;

use ortho_config::{OrthoConfig, OrthoResult};
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_LISTEN_HOST, DEFAULT_LISTEN_PORT, DEFAULT_LOG_FILTER, default_listen_endpoint,
    default_log_filter, default_log_filter_string, default_log_format,
};
pub use drivers::{AudioDriver, InputDriver};
pub use listen::{ListenEndpoint, ListenParseError};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved daemon configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "REMOTECTL")]
pub struct Config {
    /// Address the HTTP listener binds.
    #[ortho_config(default = default_listen_endpoint())]
    pub listen: ListenEndpoint,
    /// `tracing` filter directive, for example `info` or `remotectld=debug`.
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Log line format.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
    /// Host tool used for volume and mute control.
    #[ortho_config(default = AudioDriver::default())]
    pub audio_driver: AudioDriver,
    /// Host tool used for key simulation.
    #[ortho_config(default = InputDriver::default())]
    pub input_driver: InputDriver,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_listen_endpoint(),
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            audio_driver: AudioDriver::default(),
            input_driver: InputDriver::default(),
        }
    }
}

impl Config {
    /// Resolves the configuration from the process arguments, environment and
    /// configuration file.
    ///
    /// # Errors
    ///
    /// Returns the `ortho_config` error when any layer fails to parse or merge.
    pub fn load() -> OrthoResult<Self> {
        <Self as OrthoConfig>::load()
    }

    /// Resolves the configuration from an explicit argument list.
    ///
    /// The first item is the program name, as with [`std::env::args_os`].
    ///
    /// # Errors
    ///
    /// Returns the `ortho_config` error when any layer fails to parse or merge.
    pub fn load_from_iter<I, T>(args: I) -> OrthoResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as OrthoConfig>::load_from_iter(args)
    }

    /// Listener endpoint.
    #[must_use]
    pub fn listen(&self) -> &ListenEndpoint {
        &self.listen
    }

    /// Log filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Log output format.
    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Audio backend driver.
    #[must_use]
    pub fn audio_driver(&self) -> AudioDriver {
        self.audio_driver
    }

    /// Input backend driver.
    #[must_use]
    pub fn input_driver(&self) -> InputDriver {
        self.input_driver
    }
}
