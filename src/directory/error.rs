use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum DirectoryError {
    /// API key missing or unusable. Detected before any network call.
    Config(String),
    /// Transport-level failure (DNS, TLS, timeout, connection reset).
    Network(String),
    /// Upstream answered with a non-success status.
    Http(u16, String),
    /// 2xx body that did not match the expected envelope.
    Deserialize(String),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Config(msg) => write!(f, "Directory config error: {msg}"),
            DirectoryError::Network(msg) => write!(f, "Network error: {msg}"),
            DirectoryError::Http(status, msg) => write!(f, "Directory HTTP {status}: {msg}"),
            DirectoryError::Deserialize(msg) => write!(f, "Unexpected response shape: {msg}"),
        }
    }
}

impl Error for DirectoryError {}
