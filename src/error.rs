//! Request-level error taxonomy
//!
//! Every failure a case handler can produce while answering a request.
//! All variants are expected and recoverable: the dispatcher renders them
//! as a 404 error page and the server keeps running.

use std::io;
use thiserror::Error;

/// Failure surfaced by a case handler's `respond`.
///
/// The `path` carried by each variant is the raw request path (not the
/// resolved filesystem path), so error pages echo what the client asked for.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The resolved path does not exist at all.
    #[error("'{path}' not found")]
    NotFound { path: String },

    /// The path exists but its contents could not be read or enumerated.
    #[error("'{path}' cannot be read: {source}")]
    NotReadable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A script could not be spawned, timed out, or exited non-zero.
    #[error("'{path}' cannot be executed: {reason}")]
    ExecutionFailure { path: String, reason: String },

    /// Terminal case: the request matched nothing we know how to serve.
    #[error("Unknown object '{path}'")]
    UnknownObject { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_embed_request_path() {
        let err = DispatchError::NotFound {
            path: "/missing.txt".to_string(),
        };
        assert_eq!(err.to_string(), "'/missing.txt' not found");

        let err = DispatchError::UnknownObject {
            path: "/weird".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown object '/weird'");
    }

    #[test]
    fn test_not_readable_keeps_cause() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = DispatchError::NotReadable {
            path: "/secret".to_string(),
            source,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("/secret"));
        assert!(rendered.contains("denied"));
    }
}
