use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// TCP address the HTTP listener binds, written as `host:port`.
///
/// IPv6 hosts use the bracketed form, for example `[::]:6969`. The endpoint
/// serialises as that same string so file, environment, and CLI sources all
/// share one syntax.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct ListenEndpoint {
    host: String,
    port: u16,
}

impl ListenEndpoint {
    /// Builds an endpoint from its parts.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Host name or IP literal, without brackets.
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_str()
    }

    /// TCP port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for ListenEndpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(formatter, "[{}]:{}", self.host, self.port)
        } else {
            write!(formatter, "{}:{}", self.host, self.port)
        }
    }
}

impl FromStr for ListenEndpoint {
    type Err = ListenParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let (host, port) = trimmed
            .rsplit_once(':')
            .ok_or_else(|| ListenParseError::MissingPort(input.to_owned()))?;

        let host = host
            .strip_prefix('[')
            .and_then(|inner| inner.strip_suffix(']'))
            .unwrap_or(host);
        if host.is_empty() {
            return Err(ListenParseError::MissingHost(input.to_owned()));
        }
        if port.is_empty() {
            return Err(ListenParseError::MissingPort(input.to_owned()));
        }

        let port = port
            .parse::<u16>()
            .map_err(|source| ListenParseError::InvalidPort {
                input: input.to_owned(),
                source,
            })?;
        Ok(Self::new(host, port))
    }
}

impl TryFrom<String> for ListenEndpoint {
    type Error = ListenParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ListenEndpoint> for String {
    fn from(endpoint: ListenEndpoint) -> Self {
        endpoint.to_string()
    }
}

/// Errors encountered while parsing a [`ListenEndpoint`] from text.
#[derive(Debug, Error)]
pub enum ListenParseError {
    /// No host preceded the port separator.
    #[error("missing listen host in '{0}'")]
    MissingHost(String),
    /// No `:port` suffix was present.
    #[error("missing listen port in '{0}'")]
    MissingPort(String),
    /// The port was not a number in `0..=65535`.
    #[error("invalid listen port in '{input}': {source}")]
    InvalidPort {
        /// Original text.
        input: String,
        /// Integer parse failure.
        #[source]
        source: std::num::ParseIntError,
    },
}
