//! Request dispatch
//!
//! Entry point for HTTP request processing. Gates the method and (when
//! enabled) the request path, resolves the path into a `RequestContext`,
//! walks the case chain, and is the single point that converts a case
//! failure into the 404 error page. Every request leaves here with exactly
//! one well-formed response.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::config::AppState;
use crate::error::DispatchError;
use crate::handler::cases::CASE_ORDER;
use crate::handler::context::{self, RequestContext};
use crate::http::{self, Payload};
use crate::logger::{self, AccessLogEntry};

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method();
    let is_head = *method == Method::HEAD;

    if let Some(resp) = check_http_method(method) {
        return Ok(resp);
    }

    let path = req.uri().path();
    let mut entry = AccessLogEntry::new(peer_addr.to_string(), method.to_string(), path.to_string());
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_str(req.version()).to_string();
    entry.referer = header_value(&req, "referer");
    entry.user_agent = header_value(&req, "user-agent");

    let payload = respond_to_path(path, is_head, &state).await;

    entry.status = payload.status.as_u16();
    entry.body_bytes = payload.len();
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    if state.config.logging.access_log {
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(http::into_http(payload, is_head, &state.config.http.server_name))
}

/// Resolve and answer one request path.
///
/// Applies the sanitization gate when enabled, then resolves the path and
/// runs the case chain. With the gate off, resolution is plain
/// concatenation, `..` segments and all.
pub async fn respond_to_path(path: &str, is_head: bool, state: &AppState) -> Payload {
    if state.config.dispatch.sanitize_paths && !context::path_is_clean(path) {
        logger::log_warning(&format!("Rejected request path: {path}"));
        return http::error_page(path, "path contains forbidden segments");
    }
    let ctx = RequestContext::new(path, &state.root, is_head);
    dispatch(&ctx, state).await
}

/// Walk the case chain and answer the request.
///
/// First match wins: later cases are not consulted once one applies. A case
/// failure is converted here, and only here, into the 404 error page, so no
/// `DispatchError` ever escapes to the connection layer.
pub async fn dispatch(ctx: &RequestContext<'_>, state: &AppState) -> Payload {
    for case in CASE_ORDER {
        if !case.matches(ctx, &state.config.dispatch) {
            continue;
        }
        return match case.respond(ctx, state).await {
            Ok(payload) => payload,
            Err(err) => {
                logger::log_warning(&format!("Dispatch failed for {}: {err}", ctx.path));
                http::error_page(ctx.path, &err.to_string())
            }
        };
    }

    // Fallback always matches, so the chain cannot be exhausted; keep the
    // dispatcher total anyway.
    let err = DispatchError::UnknownObject {
        path: ctx.path.to_string(),
    };
    http::error_page(ctx.path, &err.to_string())
}

/// Check HTTP method and return the short-circuit response for non-GET/HEAD
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

fn version_str(version: hyper::Version) -> &'static str {
    if version == hyper::Version::HTTP_10 {
        "1.0"
    } else if version == hyper::Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
