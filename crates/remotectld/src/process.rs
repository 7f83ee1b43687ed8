//! Top-level daemon launch.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::backends::{BackendProvider, SystemBackendProvider};
use crate::bootstrap::{BootstrapError, ConfigLoader, SystemConfigLoader, bootstrap_with};
use crate::health::{HealthReporter, StructuredHealthReporter};
use crate::transport::ServeError;

const PROCESS_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::process");

/// Errors surfaced while launching or running the daemon.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Bootstrapping the daemon failed.
    #[error("daemon bootstrap failed: {source}")]
    Bootstrap {
        /// Underlying bootstrap error.
        #[source]
        source: BootstrapError,
    },
    /// The listener failed to bind or stopped with an error.
    #[error("daemon listener failed: {source}")]
    Serve {
        /// Underlying listener error.
        #[source]
        source: ServeError,
    },
}

impl From<BootstrapError> for LaunchError {
    fn from(source: BootstrapError) -> Self {
        Self::Bootstrap { source }
    }
}

impl From<ServeError> for LaunchError {
    fn from(source: ServeError) -> Self {
        Self::Serve { source }
    }
}

/// Runs the daemon using the production collaborators.
///
/// # Errors
///
/// Returns [`LaunchError`] when bootstrap fails or the listener stops with an
/// error.
pub fn run_daemon() -> Result<(), LaunchError> {
    let reporter = Arc::new(StructuredHealthReporter::new());
    run_daemon_with(&SystemConfigLoader, reporter, &SystemBackendProvider)
}

/// Runs the daemon with injected collaborators.
pub(crate) fn run_daemon_with<L, P>(
    loader: &L,
    reporter: Arc<dyn HealthReporter>,
    provider: &P,
) -> Result<(), LaunchError>
where
    L: ConfigLoader,
    P: BackendProvider,
{
    let daemon = bootstrap_with(loader, reporter, provider)?;
    info!(
        target: PROCESS_TARGET,
        listen = %daemon.config().listen(),
        "starting listener"
    );
    daemon.serve()?;
    info!(target: PROCESS_TARGET, "shutdown sequence completed");
    Ok(())
}
