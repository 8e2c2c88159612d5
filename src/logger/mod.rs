//! Logger module
//!
//! Server lifecycle logging, access logging, and error/warning diagnostics.
//! Before `init` runs (and in tests) everything falls back to
//! stdout/stderr.

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use std::net::SocketAddr;

use crate::config::{AppState, Config};

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

/// Write to access log specifically
fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, state: &AppState) {
    let cfg = &state.config;
    write_info("======================================");
    write_info("caserv started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Serving root: {}", state.root));
    write_info(&format!(
        "Index file: {} | script suffix: {}",
        cfg.dispatch.index_file, cfg.dispatch.script_suffix
    ));
    write_info(&format!("Log level: {}", cfg.logging.level));
    if let Some(workers) = cfg.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = cfg.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = cfg.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}
