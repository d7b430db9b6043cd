use thiserror::Error;

/// Failure of a single call against the remote PharmaLedger API.
///
/// Every call is attempted exactly once; callers decide whether a failure is
/// surfaced to the user or only logged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (connection refused, CORS, offline).
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status. `message` is the server's
    /// `error` field when it sent one.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The server answered 2xx but reported `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// The response body could not be decoded.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}
