//! Wire types shared between the `remotectld` daemon and its clients.
//!
//! Clients post a [`KeyCommand`] as JSON to `POST /api/key`. The daemon
//! answers with the [`ACCEPTED`] body on success or an [`ErrorBody`] on
//! failure. Key codes listed in [`ReservedKey`] are intercepted for audio and
//! media handling; every other code is simulated as a raw key press.

mod command;
mod envelope;
mod keycode;

pub use command::KeyCommand;
pub use envelope::{ACCEPTED, ErrorBody};
pub use keycode::ReservedKey;
