//! HTTP listener lifecycle.

use actix_web::{App, HttpServer, web};
use remotectl_config::ListenEndpoint;
use tracing::info;

use super::TRANSPORT_TARGET;
use super::errors::ServeError;
use super::routes;
use crate::dispatch::Dispatcher;
use crate::health::HealthReporter;

/// Binds `endpoint` and serves key commands until the server shuts down.
///
/// The actix server installs its own SIGINT/SIGTERM handlers and drains
/// in-flight requests before this future resolves.
///
/// # Errors
///
/// Returns [`ServeError::Bind`] when the endpoint cannot be bound and
/// [`ServeError::Run`] when the server exits with an error.
pub async fn serve(
    endpoint: &ListenEndpoint,
    dispatcher: Dispatcher,
    reporter: &dyn HealthReporter,
) -> Result<(), ServeError> {
    let data = web::Data::new(dispatcher);
    let server = HttpServer::new(move || App::new().configure(routes::configure(data.clone())))
        .bind((endpoint.host(), endpoint.port()))
        .map_err(|source| ServeError::Bind {
            endpoint: endpoint.to_string(),
            source,
        })?;

    for address in server.addrs() {
        reporter.listener_bound(address);
    }

    server.run().await.map_err(|source| ServeError::Run { source })?;
    info!(target: TRANSPORT_TARGET, "listener drained");
    Ok(())
}
