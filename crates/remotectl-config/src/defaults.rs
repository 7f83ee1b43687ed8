use crate::listen::ListenEndpoint;
use crate::logging::LogFormat;

/// Default listener host. Binds every interface so phones on the LAN can
/// reach the daemon.
pub const DEFAULT_LISTEN_HOST: &str = "0.0.0.0";

/// Default listener port.
pub const DEFAULT_LISTEN_PORT: u16 = 6969;

/// Default log filter expression used by the daemon.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default log filter expression used by the daemon.
#[must_use]
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the daemon.
#[must_use]
pub fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Default listener endpoint.
#[must_use]
pub fn default_listen_endpoint() -> ListenEndpoint {
    ListenEndpoint::new(DEFAULT_LISTEN_HOST, DEFAULT_LISTEN_PORT)
}
