//! Route table and request handlers.

use std::convert::identity;

use actix_web::{HttpRequest, HttpResponse, error::JsonPayloadError, web};
use remotectl_types::KeyCommand;
use tracing::{debug, warn};

use super::TRANSPORT_TARGET;
use super::response::accepted;
use crate::dispatch::{Dispatcher, Failure, FailureKind};

/// Registers the `/api` scope and its shared state.
pub(crate) fn configure(dispatcher: web::Data<Dispatcher>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |config| {
        config
            .app_data(dispatcher)
            .app_data(json_config())
            .service(web::scope("/api").route("/key", web::post().to(submit_key)));
    }
}

/// Bodies decode as JSON whatever their `Content-Type`.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type(|_| true)
        .content_type_required(false)
        .error_handler(reject_body)
}

fn reject_body(error: JsonPayloadError, _request: &HttpRequest) -> actix_web::Error {
    let failure = Failure::new(FailureKind::BindError, error.to_string());
    log_failure(&failure);
    failure.into()
}

async fn submit_key(
    dispatcher: web::Data<Dispatcher>,
    body: web::Json<Option<KeyCommand>>,
) -> Result<HttpResponse, Failure> {
    // A JSON `null` body is the zero command.
    let command = body.into_inner().unwrap_or_default();
    let worker = dispatcher.into_inner();
    let outcome = web::block(move || worker.dispatch(&command))
        .await
        .map_err(|error| Failure::new(FailureKind::Internal, error.to_string()))
        .and_then(identity);

    match outcome {
        Ok(()) => {
            debug!(
                target: TRANSPORT_TARGET,
                key = command.key,
                pressed = command.pressed,
                tap = command.tap,
                "command accepted"
            );
            Ok(accepted())
        }
        Err(failure) => {
            log_failure(&failure);
            Err(failure)
        }
    }
}

fn log_failure(failure: &Failure) {
    warn!(
        target: TRANSPORT_TARGET,
        status = failure.http_status(),
        err = failure.detail(),
        message = failure.user_message(),
        "command rejected"
    );
}
