// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub dispatch: DispatchConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, or json)
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub default_content_type: String,
    pub server_name: String,
}

/// Dispatch configuration
///
/// The knobs of the case chain: where the filesystem root is, what counts
/// as a directory index, what counts as a script, and how scripts run.
#[derive(Debug, Deserialize, Clone)]
pub struct DispatchConfig {
    /// Server root; `"."` resolves to the process working directory at startup.
    pub root: String,
    /// Directory default document name.
    pub index_file: String,
    /// Filename suffix that marks a file as an executable script.
    pub script_suffix: String,
    /// Program to run scripts with; scripts are executed directly when unset.
    #[serde(default)]
    pub interpreter: Option<String>,
    /// Script execution bound in seconds; 0 disables the bound.
    pub script_timeout: u64,
    /// Reject request paths containing `..` segments before resolution.
    pub sanitize_paths: bool,
}
