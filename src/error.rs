use thiserror::Error;

/// Normalized outcome of a failed remote call.
///
/// `status` is the HTTP status when one was reachable; a transport failure
/// (connection refused, malformed body) carries no status. `message` is the
/// server-provided message, empty when the body had none.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiFailure {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiFailure {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn is(&self, code: u16) -> bool {
        self.status == Some(code)
    }
}
