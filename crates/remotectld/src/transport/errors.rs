//! Errors surfaced by the HTTP listener.

use std::io;

use thiserror::Error;

/// Errors raised while binding or running the listener.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The configured endpoint could not be bound.
    #[error("failed to bind listener on {endpoint}: {source}")]
    Bind {
        /// Endpoint that failed to bind, as configured.
        endpoint: String,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The server stopped with an error after binding.
    #[error("listener stopped unexpectedly: {source}")]
    Run {
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}
