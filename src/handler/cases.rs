//! The case chain
//!
//! Six strategies classify a request path, tried in a fixed order; the first
//! whose `matches` holds answers the request. The variants carry no state:
//! the whole chain is a const array shared by every request.
//!
//! `matches` probes filesystem metadata synchronously (cheap stat calls, the
//! same probes the content loaders would make anyway); `respond` does the
//! actual I/O through the content modules.

use crate::config::{AppState, DispatchConfig};
use crate::content::{file, listing, script};
use crate::error::DispatchError;
use crate::handler::context::RequestContext;
use crate::http::mime;
use crate::http::payload::{Payload, HTML_UTF8};

/// One strategy in the dispatch chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// The resolved path does not exist at all.
    NoSuchPath,
    /// A regular file named with the script suffix; run it.
    ExecutableScript,
    /// Any other existing regular file; serve its bytes.
    RegularFile,
    /// A directory holding the index file; serve that file.
    DirectoryWithIndex,
    /// A directory without an index file; serve a listing.
    DirectoryWithoutIndex,
    /// Terminal case: always matches, always fails.
    Fallback,
}

/// Dispatch order. This ordering is a contract: scripts take precedence
/// over plain files, an index file takes precedence over a listing, and
/// Fallback is terminal so every request gets an answer.
pub const CASE_ORDER: [Case; 6] = [
    Case::NoSuchPath,
    Case::ExecutableScript,
    Case::RegularFile,
    Case::DirectoryWithIndex,
    Case::DirectoryWithoutIndex,
    Case::Fallback,
];

impl Case {
    /// Does this case apply to the request?
    pub fn matches(self, ctx: &RequestContext<'_>, rules: &DispatchConfig) -> bool {
        let full = ctx.full();
        match self {
            Self::NoSuchPath => !full.exists(),
            Self::ExecutableScript => {
                full.is_file() && ctx.full_path.ends_with(&rules.script_suffix)
            }
            Self::RegularFile => full.is_file(),
            Self::DirectoryWithIndex => {
                full.is_dir() && ctx.index_path(&rules.index_file).is_file()
            }
            Self::DirectoryWithoutIndex => {
                full.is_dir() && !ctx.index_path(&rules.index_file).is_file()
            }
            Self::Fallback => true,
        }
    }

    /// Produce the response payload, or the error the dispatcher will render.
    pub async fn respond(
        self,
        ctx: &RequestContext<'_>,
        state: &AppState,
    ) -> Result<Payload, DispatchError> {
        let rules = &state.config.dispatch;
        match self {
            Self::NoSuchPath => Err(DispatchError::NotFound {
                path: ctx.path.to_string(),
            }),

            Self::ExecutableScript => {
                let stdout = script::run(
                    ctx.full(),
                    ctx.path,
                    rules.interpreter.as_deref(),
                    rules.script_timeout,
                )
                .await?;
                Ok(Payload::ok(stdout, HTML_UTF8))
            }

            Self::RegularFile => {
                let bytes = file::read_all(ctx.full(), ctx.path).await?;
                let content_type = match mime::content_type_for(ctx.full()) {
                    Some(inferred) => inferred,
                    None => state.config.http.default_content_type.as_str(),
                };
                Ok(Payload::ok(bytes, content_type))
            }

            Self::DirectoryWithIndex => {
                let index = ctx.index_path(&rules.index_file);
                let bytes = file::read_all(&index, ctx.path).await?;
                let content_type = mime::content_type_for(&index).unwrap_or(HTML_UTF8);
                Ok(Payload::ok(bytes, content_type))
            }

            Self::DirectoryWithoutIndex => {
                let page = listing::render(ctx.full(), ctx.path).await?;
                Ok(Payload::html(page))
            }

            Self::Fallback => Err(DispatchError::UnknownObject {
                path: ctx.path.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig,
    };
    use std::path::Path;
    use tempfile::TempDir;

    fn test_state(root: &Path) -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                workers: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
                access_log_format: "common".to_string(),
                access_log_file: None,
                error_log_file: None,
            },
            performance: PerformanceConfig {
                keep_alive_timeout: 0,
                read_timeout: 5,
                write_timeout: 5,
                max_connections: None,
            },
            http: HttpConfig {
                default_content_type: "text/html; charset=utf-8".to_string(),
                server_name: "caserv-test".to_string(),
            },
            dispatch: DispatchConfig {
                root: root.to_string_lossy().into_owned(),
                index_file: "index.html".to_string(),
                script_suffix: ".cgi".to_string(),
                interpreter: None,
                script_timeout: 5,
                sanitize_paths: true,
            },
        };
        AppState::new(config).unwrap()
    }

    fn first_match(ctx: &RequestContext<'_>, rules: &DispatchConfig) -> Case {
        *CASE_ORDER
            .iter()
            .find(|case| case.matches(ctx, rules))
            .expect("Fallback always matches")
    }

    #[test]
    fn test_missing_path_matches_no_such_path() {
        let dir = TempDir::new().unwrap();
        let state = test_state(dir.path());
        let ctx = RequestContext::new("/missing.txt", &state.root, false);
        assert_eq!(first_match(&ctx, &state.config.dispatch), Case::NoSuchPath);
    }

    #[test]
    fn test_script_takes_precedence_over_regular_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("run.cgi"), "#!/bin/sh\n").unwrap();
        let state = test_state(dir.path());
        let ctx = RequestContext::new("/run.cgi", &state.root, false);
        assert_eq!(
            first_match(&ctx, &state.config.dispatch),
            Case::ExecutableScript
        );
    }

    #[test]
    fn test_plain_file_matches_regular_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("page.txt"), "x").unwrap();
        let state = test_state(dir.path());
        let ctx = RequestContext::new("/page.txt", &state.root, false);
        assert_eq!(first_match(&ctx, &state.config.dispatch), Case::RegularFile);
    }

    #[test]
    fn test_index_takes_precedence_over_listing() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("docs");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("index.html"), "<p>INDEX</p>").unwrap();
        std::fs::write(sub.join("other.txt"), "x").unwrap();
        let state = test_state(dir.path());
        let ctx = RequestContext::new("/docs", &state.root, false);
        assert_eq!(
            first_match(&ctx, &state.config.dispatch),
            Case::DirectoryWithIndex
        );
    }

    #[test]
    fn test_bare_directory_matches_listing() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("files");
        std::fs::create_dir(&sub).unwrap();
        let state = test_state(dir.path());
        let ctx = RequestContext::new("/files", &state.root, false);
        assert_eq!(
            first_match(&ctx, &state.config.dispatch),
            Case::DirectoryWithoutIndex
        );
    }

    #[test]
    fn test_fallback_always_matches() {
        let dir = TempDir::new().unwrap();
        let state = test_state(dir.path());
        let ctx = RequestContext::new("/anything", &state.root, false);
        assert!(Case::Fallback.matches(&ctx, &state.config.dispatch));
    }

    #[tokio::test]
    async fn test_regular_file_respond_returns_exact_bytes() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("page.txt"), "plain contents").unwrap();
        let state = test_state(dir.path());
        let ctx = RequestContext::new("/page.txt", &state.root, false);

        let payload = Case::RegularFile.respond(&ctx, &state).await.unwrap();
        assert_eq!(&payload.bytes[..], b"plain contents");
        assert_eq!(payload.content_type, "text/plain; charset=utf-8");
    }

    #[tokio::test]
    async fn test_unknown_extension_falls_back_to_default_content_type() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("blob.qqq"), "?").unwrap();
        let state = test_state(dir.path());
        let ctx = RequestContext::new("/blob.qqq", &state.root, false);

        let payload = Case::RegularFile.respond(&ctx, &state).await.unwrap();
        assert_eq!(payload.content_type, "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn test_directory_with_index_serves_index_contents() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("docs");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("index.html"), "<p>INDEX</p>").unwrap();
        let state = test_state(dir.path());
        let ctx = RequestContext::new("/docs", &state.root, false);

        let payload = Case::DirectoryWithIndex.respond(&ctx, &state).await.unwrap();
        assert_eq!(&payload.bytes[..], b"<p>INDEX</p>");
    }

    #[tokio::test]
    async fn test_no_such_path_fails_with_not_found() {
        let dir = TempDir::new().unwrap();
        let state = test_state(dir.path());
        let ctx = RequestContext::new("/missing.txt", &state.root, false);

        let err = Case::NoSuchPath.respond(&ctx, &state).await.unwrap_err();
        assert!(matches!(err, DispatchError::NotFound { .. }));
        assert!(err.to_string().contains("/missing.txt"));
    }
}
