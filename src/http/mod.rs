//! HTTP protocol layer
//!
//! Payload type, MIME inference, and response serialization, decoupled from
//! the dispatch logic.

pub mod mime;
pub mod payload;
pub mod response;

pub use payload::Payload;
pub use response::{build_405_response, build_options_response, error_page, into_http};
