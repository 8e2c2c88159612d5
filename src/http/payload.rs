//! Response payload type
//!
//! The value every case handler produces: a fully buffered body plus the
//! status code and content type it should be served with. Nothing here is
//! streamed; content is complete before the wire layer sees it.

use hyper::body::Bytes;
use hyper::StatusCode;

/// Content type for every page the server generates itself.
pub const HTML_UTF8: &str = "text/html; charset=utf-8";

/// A fully buffered response body with its status and content type.
#[derive(Debug)]
pub struct Payload {
    pub bytes: Bytes,
    pub status: StatusCode,
    pub content_type: String,
}

impl Payload {
    /// Successful payload with an explicit content type.
    pub fn ok(bytes: Vec<u8>, content_type: &str) -> Self {
        Self {
            bytes: Bytes::from(bytes),
            status: StatusCode::OK,
            content_type: content_type.to_string(),
        }
    }

    /// Successful HTML page.
    pub fn html(content: String) -> Self {
        Self {
            bytes: Bytes::from(content),
            status: StatusCode::OK,
            content_type: HTML_UTF8.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
