//! Request handler module
//!
//! The core of the server: path resolution, the ordered case chain, and the
//! dispatcher that walks it.

pub mod cases;
pub mod context;
pub mod dispatch;

// Re-export main entry point
pub use dispatch::handle_request;
