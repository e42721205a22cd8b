//! Load Errors
//!
//! Every way a snapshot load can fail. The dashboard shows them all the same
//! way; only the message differs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("HTTP {status} while fetching {path}")]
    Status { status: u16, path: String },
    /// The body was not a task snapshot.
    #[error("invalid task snapshot: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_names_path() {
        let err = LoadError::Status { status: 404, path: "tasks.json".to_string() };
        assert_eq!(err.to_string(), "HTTP 404 while fetching tasks.json");
    }

    #[test]
    fn test_parse_error_from_serde() {
        let err: LoadError = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err().into();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.to_string().starts_with("invalid task snapshot: "));
    }
}
