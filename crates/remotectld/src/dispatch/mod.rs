//! Key command dispatch.
//!
//! A [`Dispatcher`] classifies each [`KeyCommand`](remotectl_types::KeyCommand)
//! as a volume action, a mute action, a media action or a raw key, and drives
//! the matching backend. Failures are reported as a [`Failure`] whose
//! [`FailureKind`] selects the message and HTTP status sent to the caller:
//!
//! ```json
//! {"err":"feature not implemented yet","message":"Feature not implemented yet."}
//! ```

mod dispatcher;
mod errors;

pub use self::dispatcher::{Dispatcher, VOLUME_STEP};
pub use self::errors::{Failure, FailureKind, NOT_IMPLEMENTED_DETAIL};
