//! HTTP transport for key commands.
//!
//! A single route accepts commands:
//!
//! ```text
//! POST /api/key
//! {"key":1001,"pressed":false,"tap":false}
//! ```
//!
//! Executed commands answer `202` with the JSON string `"Accepted"`. Rejected
//! commands answer with the status of their failure category and an
//! `{"err": ..., "message": ...}` envelope.

mod errors;
mod response;
pub(crate) mod routes;
mod server;

pub use self::errors::ServeError;
pub use self::server::serve;

pub(crate) const TRANSPORT_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::transport");
