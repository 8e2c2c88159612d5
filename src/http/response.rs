//! HTTP response building
//!
//! Serializes a `Payload` into a hyper response and provides the builders
//! for the few responses that never reach the dispatcher (405, OPTIONS) and
//! the error page every dispatch failure renders.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::http::payload::{Payload, HTML_UTF8};
use crate::logger;

/// Error page layout. Every `DispatchError` renders through this template,
/// embedding the literal request path and the error message.
const ERROR_PAGE: &str = "<html>\n<body>\n<h1>Error accessing {path}</h1>\n<p>{message}</p>\n</body>\n</html>\n";

/// Build the 404 error page payload for a failed dispatch.
pub fn error_page(path: &str, message: &str) -> Payload {
    let body = ERROR_PAGE
        .replace("{path}", path)
        .replace("{message}", message);
    Payload {
        bytes: Bytes::from(body),
        status: StatusCode::NOT_FOUND,
        content_type: HTML_UTF8.to_string(),
    }
}

/// Serialize a payload into the wire response.
///
/// Content-Length always reflects the payload's byte length; a HEAD request
/// keeps the length but sends an empty body.
pub fn into_http(payload: Payload, is_head: bool, server_name: &str) -> Response<Full<Bytes>> {
    let content_length = payload.len();
    let body = if is_head { Bytes::new() } else { payload.bytes };

    Response::builder()
        .status(payload.status)
        .header("Content-Type", payload.content_type)
        .header("Content-Length", content_length)
        .header("Server", server_name)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("payload", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(what: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {what} response: {error}"));
}
