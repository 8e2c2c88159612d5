// Application state module
// Immutable per-process state shared across connections

use std::io;

use super::types::Config;

/// Application state
///
/// Built once at startup and shared via `Arc`. Nothing in here is mutated
/// after construction, so request tasks read it without locking.
pub struct AppState {
    pub config: Config,
    /// Resolved server root; request paths are appended to this verbatim.
    pub root: String,
}

impl AppState {
    /// Create `AppState`, resolving the configured root directory.
    ///
    /// A root of `"."` becomes the process working directory, captured once
    /// here rather than per request. A trailing slash is trimmed so the
    /// `root + path` concatenation cannot produce a doubled separator.
    pub fn new(config: Config) -> io::Result<Self> {
        let root = if config.dispatch.root == "." {
            std::env::current_dir()?.to_string_lossy().into_owned()
        } else {
            config.dispatch.root.trim_end_matches('/').to_string()
        };
        Ok(Self { config, root })
    }
}
