//! HTTP rendering of dispatch outcomes.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use remotectl_types::ACCEPTED;

use crate::dispatch::Failure;

impl ResponseError for Failure {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_body())
    }
}

/// Builds the 202 response for an executed command.
pub(crate) fn accepted() -> HttpResponse {
    HttpResponse::Accepted().json(ACCEPTED)
}
