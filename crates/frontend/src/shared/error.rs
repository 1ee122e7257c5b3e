//! Structured error carried by every fallible operation of the frontend.
//!
//! Components keep an `Option<AppError>` signal and render `message`; `kind`
//! decides side effects (an `Unauthorized` error ends the session).

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong credentials on login
    Authentication,
    /// Token rejected by the server
    Unauthorized,
    NotFound,
    /// Rejected locally before any request was sent
    Validation,
    /// Every fetch of a batch failed
    EmptyBatch,
    /// Request never reached the server or the response never arrived
    Transport,
    /// Non-2xx response
    Server,
    /// Response body did not match the expected shape
    Decode,
    /// Print cycle refused or abandoned before the dialog opened
    Print,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, message)
    }

    /// Error for a non-2xx status. The server message wins over `fallback`.
    pub fn from_status(status: u16, server_message: Option<String>, fallback: &str) -> Self {
        let kind = match status {
            401 | 403 => ErrorKind::Unauthorized,
            404 => ErrorKind::NotFound,
            _ => ErrorKind::Server,
        };
        let message = server_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("{} (HTTP {})", fallback, status));
        Self::new(kind, message)
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_kept_verbatim() {
        let err = AppError::from_status(422, Some("Qty melebihi SPK".into()), "Failed to save");
        assert_eq!(err.kind, ErrorKind::Server);
        assert_eq!(err.to_string(), "Qty melebihi SPK");
    }

    #[test]
    fn test_fallback_message_when_server_is_silent() {
        let err = AppError::from_status(500, None, "Failed to save");
        assert_eq!(err.message, "Failed to save (HTTP 500)");

        let err = AppError::from_status(500, Some("  ".into()), "Failed to save");
        assert_eq!(err.message, "Failed to save (HTTP 500)");
    }

    #[test]
    fn test_status_kinds() {
        assert!(AppError::from_status(401, None, "x").is(ErrorKind::Unauthorized));
        assert!(AppError::from_status(403, None, "x").is(ErrorKind::Unauthorized));
        assert!(AppError::from_status(404, None, "x").is(ErrorKind::NotFound));
    }
}
