//! Daemon bootstrap orchestration.

use std::sync::Arc;

use actix_web::rt::System;
use ortho_config::OrthoError;
use thiserror::Error;

use remotectl_config::Config;

use crate::backends::BackendProvider;
use crate::dispatch::Dispatcher;
use crate::health::HealthReporter;
use crate::telemetry::{self, TelemetryError};
use crate::transport::{self, ServeError};

/// Trait abstracting configuration loading for testability.
pub trait ConfigLoader: Send + Sync {
    /// Loads the daemon configuration.
    ///
    /// # Errors
    ///
    /// Returns the loader error when no valid configuration can be resolved.
    fn load(&self) -> Result<Config, Arc<OrthoError>>;
}

/// Loader that delegates to [`Config::load`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConfigLoader;

impl ConfigLoader for SystemConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Config::load()
    }
}

/// Loader that always yields the same configuration.
#[derive(Debug, Clone)]
pub struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    /// Wraps an already resolved configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Ok(self.config.clone())
    }
}

/// Errors surfaced during bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Underlying loader error.
        #[source]
        source: Arc<OrthoError>,
    },
    /// Telemetry initialisation failed.
    #[error("failed to initialise telemetry: {source}")]
    Telemetry {
        /// Underlying telemetry error.
        #[source]
        source: TelemetryError,
    },
}

/// Result of a successful bootstrap invocation.
pub struct Daemon {
    config: Config,
    dispatcher: Dispatcher,
    reporter: Arc<dyn HealthReporter>,
}

impl Daemon {
    fn new(config: Config, dispatcher: Dispatcher, reporter: Arc<dyn HealthReporter>) -> Self {
        Self {
            config,
            dispatcher,
            reporter,
        }
    }

    /// Accessor for the resolved configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Accessor for the dispatcher wired to the configured backends.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Runs the HTTP listener on a dedicated actix system until shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError`] when the listener cannot bind or fails while
    /// running. The failure is also reported to the health reporter.
    pub fn serve(self) -> Result<(), ServeError> {
        let Self {
            config,
            dispatcher,
            reporter,
        } = self;

        let result = System::new().block_on(transport::serve(
            config.listen(),
            dispatcher,
            reporter.as_ref(),
        ));
        match &result {
            Ok(()) => reporter.listener_stopped(),
            Err(error) => reporter.listener_failed(error),
        }
        result
    }
}

/// Bootstraps the daemon using the supplied collaborators.
///
/// # Errors
///
/// Returns [`BootstrapError`] when configuration or telemetry cannot be set
/// up. Each failure is reported before it is returned.
pub fn bootstrap_with<P>(
    loader: &dyn ConfigLoader,
    reporter: Arc<dyn HealthReporter>,
    provider: &P,
) -> Result<Daemon, BootstrapError>
where
    P: BackendProvider + ?Sized,
{
    reporter.bootstrap_starting();

    let config = match loader.load() {
        Ok(config) => config,
        Err(source) => {
            let error = BootstrapError::Configuration { source };
            reporter.bootstrap_failed(&error);
            return Err(error);
        }
    };

    if let Err(source) = telemetry::initialise(&config) {
        let error = BootstrapError::Telemetry { source };
        reporter.bootstrap_failed(&error);
        return Err(error);
    }

    let dispatcher = Dispatcher::from_backends(provider.backends(&config));
    reporter.bootstrap_succeeded(&config);

    Ok(Daemon::new(config, dispatcher, reporter))
}
